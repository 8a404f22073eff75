//! Data-driven game balance
//!
//! Every field has a default matching the shipped game, so a tuning file only
//! needs to list the values it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Inclusive `[min, max]` range sampled for randomized spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<(), TuningError> {
        if self.min > self.max {
            return Err(TuningError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Rotation rate while a rotate key is held (degrees/sec)
    pub rotate_speed: f32,
    /// Speed added along the heading per second of thrust
    pub thrust: f32,
    pub max_speed: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_life: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            rotate_speed: 300.0,
            thrust: 500.0,
            max_speed: 1000.0,
            fire_cooldown: 0.1,
            bullet_speed: 700.0,
            bullet_life: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub speed: Range,
    /// Spin magnitude (degrees/sec); the sign is picked at random
    pub spin: Range,
    pub children: u32,
    pub score: u64,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            speed: Range::new(50.0, 150.0),
            spin: Range::new(25.0, 100.0),
            children: crate::consts::SPLIT_COUNT,
            score: crate::consts::KILL_SCORE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlienTuning {
    pub speed: Range,
    /// Seconds between targeting attempts
    pub fire_interval: f32,
    /// Shorter wait used after a shot was actually taken
    pub reload: f32,
    /// Asteroids closer than this are preferred over the player
    pub target_range: f32,
    /// Asteroids inside this radius are cleared when the alien arrives
    pub spawn_kill_zone: f32,
    pub bullet_speed: f32,
    pub bullet_life: f32,
    pub score: u64,
    pub dust: u32,
}

impl Default for AlienTuning {
    fn default() -> Self {
        Self {
            speed: Range::new(50.0, 150.0),
            fire_interval: 2.0,
            reload: 1.0,
            target_range: 100.0,
            spawn_kill_zone: 50.0,
            bullet_speed: 400.0,
            bullet_life: 1.0,
            score: crate::consts::KILL_SCORE,
            dust: crate::consts::SPLIT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DustTuning {
    pub speed: Range,
    pub life: Range,
}

impl Default for DustTuning {
    fn default() -> Self {
        Self {
            speed: Range::new(15.0, 100.0),
            life: Range::new(0.25, 1.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    /// Large asteroids in the opening wave
    pub start_difficulty: u32,
    /// Seconds between alien arrivals
    pub alien_interval: f32,
    /// Distance from the player at which waves and aliens appear
    pub spawn_radius: f32,
    /// Delay between the player's death and the game-over transition
    pub game_over_delay: f32,
    /// Fade-out time of the death flash
    pub flash_duration: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            start_difficulty: 3,
            alien_interval: 20.0,
            spawn_radius: 400.0,
            game_over_delay: 1.0,
            flash_duration: 0.5,
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub player: PlayerTuning,
    pub asteroid: AsteroidTuning,
    pub alien: AlienTuning,
    pub dust: DustTuning,
    pub session: SessionTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            player: PlayerTuning::default(),
            asteroid: AsteroidTuning::default(),
            alien: AlienTuning::default(),
            dust: DustTuning::default(),
            session: SessionTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check ranges and intervals the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        non_negative("player.thrust", self.player.thrust)?;
        positive("player.max_speed", self.player.max_speed)?;
        positive("player.bullet_life", self.player.bullet_life)?;
        self.asteroid.speed.validate("asteroid.speed")?;
        self.asteroid.spin.validate("asteroid.spin")?;
        self.alien.speed.validate("alien.speed")?;
        non_negative("alien.target_range", self.alien.target_range)?;
        non_negative("alien.spawn_kill_zone", self.alien.spawn_kill_zone)?;
        positive("alien.fire_interval", self.alien.fire_interval)?;
        positive("alien.reload", self.alien.reload)?;
        positive("alien.bullet_life", self.alien.bullet_life)?;
        self.dust.speed.validate("dust.speed")?;
        self.dust.life.validate("dust.life")?;
        non_negative("session.spawn_radius", self.session.spawn_radius)?;
        positive("session.alien_interval", self.session.alien_interval)?;
        positive("session.flash_duration", self.session.flash_duration)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Negative { name, value })
    }
}
