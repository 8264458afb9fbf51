use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Leaf capacity before a forced subdivision.
    pub max_points: usize,
    /// Nodes at this depth never subdivide and hold any number of points.
    pub max_depth: usize,
    /// A node only splits while both sides are at least `2 * min_size` long.
    pub min_size: u32,
    /// Node slots reserved up front.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_points: 5,
            max_depth: 10,
            min_size: 1,
            // A full split to depth 3 is 85 nodes; 64 covers typical small trees.
            pool_size: 64,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_points == 0 {
            return Err(QuadtreeError::InvalidConfig {
                field: "max_points",
                value: 0,
            });
        }
        if self.min_size == 0 {
            return Err(QuadtreeError::InvalidConfig {
                field: "min_size",
                value: 0,
            });
        }
        Ok(())
    }
}
