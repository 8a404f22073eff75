//! Impactors - an asteroid-field arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session control)
//! - `tuning`: Data-driven game balance
//! - `assets`: Sprite pools the simulation picks regions from
//! - `audio`: Sound effect catalogue and playback seam
//! - `renderer`: Draw seam and GPU-ready sprite instances
//! - `highscores`: Session score and process-lifetime high score

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScore, Scoreboard};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one update per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Points awarded for any destroyed asteroid or alien
    pub const KILL_SCORE: u64 = 10;

    /// Fragments spawned when something breaks apart
    pub const SPLIT_COUNT: u32 = 3;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert (speed, heading in degrees) to a velocity vector
#[inline]
pub fn polar_to_cartesian(speed: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}

/// Convert a velocity vector to (speed, heading in degrees)
#[inline]
pub fn cartesian_to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), normalize_degrees(v.y.atan2(v.x).to_degrees()))
}
