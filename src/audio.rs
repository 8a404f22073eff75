//! Sound effect catalogue
//!
//! The simulation only announces which effect should play; picking a concrete
//! clip from a sound pack and driving an audio device happen behind
//! [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Session start jingle
    Intro,
    /// Player fires
    Laser,
    /// Player starts thrusting
    Thruster,
    /// Asteroid or player blows up
    Explosion,
    /// Player death
    GameOver,
    /// Alien arrives
    AlienArrival,
    /// Alien fires
    AlienLaser,
    /// Alien shot down
    AlienExplosion,
}

impl SoundEffect {
    /// Sound pack category the clip is drawn from
    pub fn category(&self) -> &'static str {
        match self {
            SoundEffect::Intro => "intro",
            SoundEffect::Laser => "laser",
            SoundEffect::Thruster => "thruster",
            SoundEffect::Explosion => "explosion",
            SoundEffect::GameOver => "game-over",
            SoundEffect::AlienArrival => "sfx-ufo",
            SoundEffect::AlienLaser => "sfx-laser",
            SoundEffect::AlienExplosion => "sfx-explosion",
        }
    }
}

/// Plays sound effects announced by the simulation
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Number of effects played so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::trace!("play {}", effect.category());
    }
}
