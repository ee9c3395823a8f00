//! Axis-aligned box overlap
//!
//! Every collision in the game is a square entity against a square entity,
//! so all of it reduces to one strict AABB test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box anchored at its top-left corner (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `side` at `pos`
    #[inline]
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; boxes that only share an edge do not touch
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}
