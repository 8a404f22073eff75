//! Per-sprite instance data for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::{Sprite, SpritePool};

/// One textured quad: where to draw which region
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Bottom-left corner in playfield units
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Rotation about the quad centre, in degrees
    pub rotation: f32,
    pub alpha: f32,
    /// Index into [`SpritePool::ALL`]
    pub pool: u32,
    pub variant: u32,
}

impl SpriteInstance {
    pub fn new(sprite: &Sprite, position: Vec2, size: Vec2, rotation: f32, alpha: f32) -> Self {
        Self {
            position: position.to_array(),
            size: size.to_array(),
            rotation,
            alpha,
            pool: pool_index(sprite.pool),
            variant: sprite.variant,
        }
    }
}

fn pool_index(pool: SpritePool) -> u32 {
    SpritePool::ALL
        .iter()
        .position(|p| *p == pool)
        .unwrap_or_default() as u32
}
