use common::shapes::{Bounds, Point};
use smallvec::SmallVec;

/// One of the four partitions of a node, split at the node's center.
///
/// North is toward smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Child slot order, matching `Bounds::quarters`.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Routes `point` relative to the center of `bounds`.
    ///
    /// A point on the vertical center line goes west and a point on the
    /// horizontal center line goes south.
    #[inline(always)]
    pub fn classify(bounds: &Bounds, point: Point) -> Self {
        let center = bounds.center();
        let east = point.x > center.x;
        let north = point.y < center.y;
        match (north, east) {
            (true, false) => Quadrant::NorthWest,
            (true, true) => Quadrant::NorthEast,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        }
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }
}

/// Handle to a node in a [`QuadTree`](super::QuadTree).
///
/// Handles go stale when pruning releases their node; a stale handle is
/// rejected even after its slot has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

pub(crate) type NodeStack = SmallVec<[NodeId; 16]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_splits_at_center() {
        let bounds = Bounds::new(0, 0, 100, 100);
        assert_eq!(Quadrant::classify(&bounds, Point::new(10, 10)), Quadrant::NorthWest);
        assert_eq!(Quadrant::classify(&bounds, Point::new(90, 10)), Quadrant::NorthEast);
        assert_eq!(Quadrant::classify(&bounds, Point::new(10, 90)), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(&bounds, Point::new(90, 90)), Quadrant::SouthEast);
    }

    #[test]
    fn classify_center_lines_go_west_and_south() {
        let bounds = Bounds::new(0, 0, 100, 100);
        assert_eq!(Quadrant::classify(&bounds, Point::new(50, 50)), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(&bounds, Point::new(50, 10)), Quadrant::NorthWest);
        assert_eq!(Quadrant::classify(&bounds, Point::new(10, 50)), Quadrant::SouthWest);
        assert_eq!(Quadrant::classify(&bounds, Point::new(51, 50)), Quadrant::SouthEast);
        assert_eq!(Quadrant::classify(&bounds, Point::new(51, 49)), Quadrant::NorthEast);
    }

    #[test]
    fn classified_point_lies_in_matching_quarter() {
        let bounds = Bounds::new(-7, 3, 42, 29);
        let quarters = bounds.quarters();
        for x in bounds.x1 + 1..bounds.x2 {
            for y in bounds.y1 + 1..bounds.y2 {
                let point = Point::new(x, y);
                let quarter = quarters[Quadrant::classify(&bounds, point).index()];
                assert!(quarter.x1 <= x && x <= quarter.x2);
                assert!(quarter.y1 <= y && y <= quarter.y2);
            }
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
        }
    }
}
