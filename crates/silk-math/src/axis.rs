//! Cartesian axis selector.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three Cartesian axes.
///
/// Used to address a single component of a vector, e.g. when a control
/// panel edits one component of the wind vector at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The axis carrying gravity and buoyancy.
    pub const VERTICAL: Axis = Axis::Y;

    /// Component index (0, 1, 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Reads this axis' component of `v`.
    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Returns `v` with this axis' component replaced by `value`.
    #[inline]
    pub fn with(self, v: Vec3, value: f32) -> Vec3 {
        let mut out = v;
        out[self.index()] = value;
        out
    }
}
