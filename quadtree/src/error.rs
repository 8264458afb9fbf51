use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadtreeError {
    InvalidBounds {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    PointOutOfBounds {
        x: i32,
        y: i32,
        bounds_x1: i32,
        bounds_y1: i32,
        bounds_x2: i32,
        bounds_y2: i32,
    },
    InvalidConfig {
        field: &'static str,
        value: u64,
    },
    UnknownNode {
        index: u32,
        generation: u32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds { x1, y1, x2, y2 } => {
                write!(
                    f,
                    "bounds must satisfy x1 < x2 and y1 < y2 (x1: {}, y1: {}, x2: {}, y2: {})",
                    x1, y1, x2, y2
                )
            }
            QuadtreeError::PointOutOfBounds {
                x,
                y,
                bounds_x1,
                bounds_y1,
                bounds_x2,
                bounds_y2,
            } => {
                write!(
                    f,
                    "point must lie strictly inside quadtree bounds (x: {}, y: {}, bounds_x1: {}, bounds_y1: {}, bounds_x2: {}, bounds_y2: {})",
                    x, y, bounds_x1, bounds_y1, bounds_x2, bounds_y2
                )
            }
            QuadtreeError::InvalidConfig { field, value } => {
                write!(f, "config field `{}` must be at least 1 (got: {})", field, value)
            }
            QuadtreeError::UnknownNode { index, generation } => {
                write!(
                    f,
                    "node handle does not refer to a live node (index: {}, generation: {})",
                    index, generation
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
