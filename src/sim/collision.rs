//! Axis-aligned collision boxes
//!
//! Every colliding entity carries a [`Hitbox`] relative to its position. Each
//! frame the manager turns those into world-space [`Aabb`]s and tests every
//! pair. O(n²) is fine for the few hundred bodies a field ever holds; a grid
//! or sweep would be the next step past that.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision box relative to an entity's position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hitbox {
    pub offset: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    /// Box covering the whole sprite
    pub fn full(size: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            size,
        }
    }

    /// Box of half the sprite size, centred on the sprite
    pub fn inset_half(size: Vec2) -> Self {
        Self {
            offset: size / 4.0,
            size: size / 2.0,
        }
    }

    /// Place the box in world space
    pub fn at(&self, pos: Vec2) -> Aabb {
        Aabb {
            min: pos + self.offset,
            size: self.size,
        }
    }
}

/// World-space axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; boxes that only touch along an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Every unordered pair `(i, j)` with `i < j` whose boxes overlap.
///
/// `None` entries (non-colliding or dead entities) never pair. Pairs come out
/// in ascending `(i, j)` order.
pub fn overlapping_pairs(boxes: &[Option<Aabb>]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            if a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
