//! Motion primitives
//!
//! Headings are in degrees, counter-clockwise from +x, with +y up. Velocities
//! are stored as vectors; speed and direction are derived on demand so that
//! adding two motions is plain vector addition.

use glam::Vec2;

use crate::{cartesian_to_polar, normalize_degrees, polar_to_cartesian};

/// Unit vector for a heading in degrees
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    polar_to_cartesian(1.0, degrees)
}

/// Velocity with the given speed along `degrees`
#[inline]
pub fn motion(speed: f32, degrees: f32) -> Vec2 {
    polar_to_cartesian(speed.max(0.0), degrees)
}

/// Speed of a velocity vector
#[inline]
pub fn speed(vel: Vec2) -> f32 {
    vel.length()
}

/// Heading of a velocity vector in [0, 360); zero for a stationary body
#[inline]
pub fn direction(vel: Vec2) -> f32 {
    if vel == Vec2::ZERO {
        0.0
    } else {
        cartesian_to_polar(vel).1
    }
}

/// Heading from `from` towards `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    normalize_degrees(d.y.atan2(d.x).to_degrees())
}

/// Clamp a velocity's speed, keeping its direction
pub fn cap_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let current = speed(vel);
    if current > max_speed {
        motion(max_speed, direction(vel))
    } else {
        vel
    }
}

/// Wrap a sprite whose bottom-left corner is `pos` across the playfield edges.
///
/// A sprite is only relocated once it has fully left the playfield on an axis:
/// right edge below zero jumps to the far edge, left edge past the far edge
/// jumps to one sprite-width before zero.
pub fn wrap_sprite(pos: Vec2, size: Vec2, playfield: Vec2) -> Vec2 {
    let mut out = pos;
    if pos.x + size.x < 0.0 {
        out.x = playfield.x;
    } else if pos.x > playfield.x {
        out.x = -size.x;
    }
    if pos.y + size.y < 0.0 {
        out.y = playfield.y;
    } else if pos.y > playfield.y {
        out.y = -size.y;
    }
    out
}

/// Fold a point that overshot the playfield by less than one playfield back
/// onto it (used to place spawns offset from the player)
pub fn wrap_point(p: Vec2, playfield: Vec2) -> Vec2 {
    let mut out = p;
    if p.x < 0.0 {
        out.x = playfield.x + p.x;
    } else if p.x > playfield.x {
        out.x = p.x - playfield.x;
    }
    if p.y < 0.0 {
        out.y = playfield.y + p.y;
    } else if p.y > playfield.y {
        out.y = p.y - playfield.y;
    }
    out
}
