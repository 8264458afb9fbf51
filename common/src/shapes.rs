use rand::Rng;
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by two opposite corners.
///
/// `y` grows downward: `y1` is the top edge and `y2` the bottom edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // Widened so that bounds spanning the whole i32 range do not overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    pub fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    /// Midpoint of the rectangle, truncated toward the top-left corner.
    pub fn center(&self) -> Point {
        Point {
            x: (i64::from(self.x1) + self.width() / 2) as i32,
            y: (i64::from(self.y1) + self.height() / 2) as i32,
        }
    }

    /// Strict interior test: points on an edge are outside.
    pub fn contains_point(&self, point: Point) -> bool {
        self.x1 < point.x && point.x < self.x2 && self.y1 < point.y && point.y < self.y2
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x2, self.y1)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x1, self.y2)
    }

    /// The four corners in winding order, starting at `(x1, y1)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Splits the rectangle at its center into NW, NE, SW, SE quarters.
    pub fn quarters(&self) -> [Bounds; 4] {
        let Point { x: cx, y: cy } = self.center();
        [
            Bounds::new(self.x1, self.y1, cx, cy),
            Bounds::new(cx, self.y1, self.x2, cy),
            Bounds::new(self.x1, cy, cx, self.y2),
            Bounds::new(cx, cy, self.x2, self.y2),
        ]
    }

    /// Picks a point strictly inside the rectangle, or `None` when the
    /// rectangle has no integer interior.
    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Option<Point> {
        if self.width() < 2 || self.height() < 2 {
            return None;
        }
        Some(Point {
            x: rng.gen_range(self.x1 + 1..self.x2),
            y: rng.gen_range(self.y1 + 1..self.y2),
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}
