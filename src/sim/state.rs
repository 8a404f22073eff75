//! Game session state
//!
//! One [`GameState`] is one run: the live entities, the shared [`World`]
//! services, and the session counters driving waves and alien arrivals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};
use super::manager::EntityManager;
use super::world::World;
use crate::assets::{SpriteSheet, SpriteSource};
use crate::audio::SoundEffect;
use crate::highscores::HighScore;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died and the delay ran out; ticks do nothing
    GameOver,
}

/// Events emitted by the simulation for the audio and UI collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// New session score, for the score label
    ScoreChanged(u64),
    WaveSpawned { difficulty: u32 },
    AlienSpawned(EntityId),
    PlayerDestroyed,
    /// Switch to the game-over presentation
    GameOver,
}

#[derive(Debug)]
pub struct GameState {
    pub seed: u64,
    pub phase: GamePhase,
    /// Asteroids in the next wave; grows by one every time the field empties
    pub difficulty: u32,
    /// Seconds until the next alien arrives
    pub alien_timer: f32,
    pub time_ticks: u64,
    pub entities: EntityManager,
    pub world: World,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default(), Box::new(SpriteSheet::standard()), HighScore::new())
    }

    /// Create a state from explicit tuning, sprite source and carried-over high score.
    ///
    /// The tuning is validated here so that nothing sampled during a frame can
    /// hit an empty range or a non-positive interval.
    pub fn with_config(
        seed: u64,
        tuning: Tuning,
        sprites: Box<dyn SpriteSource>,
        high: HighScore,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning, sprites, high))
    }

    fn build(seed: u64, tuning: Tuning, sprites: Box<dyn SpriteSource>, high: HighScore) -> Self {
        let difficulty = tuning.session.start_difficulty;
        let alien_timer = tuning.session.alien_interval;
        Self {
            seed,
            phase: GamePhase::Playing,
            difficulty,
            alien_timer,
            time_ticks: 0,
            entities: EntityManager::new(),
            world: World::new(seed, tuning, sprites, high),
        }
    }

    pub fn score(&self) -> u64 {
        self.world.score()
    }

    pub fn high_score(&self) -> HighScore {
        self.world.high_score()
    }

    /// Hand the high score on to the next session
    pub fn into_high_score(self) -> HighScore {
        self.world.high_score()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world.drain_events()
    }

    /// Follow a change in the rendering surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.world.playfield = Vec2::new(width, height);
        }
    }

    /// Register an entity immediately
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.spawn(entity, &mut self.world);
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.player()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_session_tuning() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, 3);
        assert_eq!(state.alien_timer, 20.0);
        assert!(state.entities.is_empty());
        assert_eq!(state.world.playfield, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_high_score_carries_over() {
        let mut high = HighScore::new();
        high.record(120);
        let mut state =
            GameState::with_config(1, Tuning::default(), Box::new(SpriteSheet::standard()), high).unwrap();
        state.world.award(10);
        assert_eq!(state.score(), 10);
        assert_eq!(state.into_high_score().best(), 120);
    }

    #[test]
    fn test_resize_ignores_degenerate_sizes() {
        let mut state = GameState::new(1);
        state.resize(0.0, 300.0);
        assert_eq!(state.world.playfield, Vec2::new(800.0, 600.0));
        state.resize(1024.0, 768.0);
        assert_eq!(state.world.playfield, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let mut tuning = Tuning::default();
        tuning.dust.life = crate::tuning::Range::new(2.0, 1.0);
        let result = GameState::with_config(1, tuning, Box::new(SpriteSheet::standard()), HighScore::new());
        assert!(matches!(result, Err(TuningError::InvertedRange { name: "dust.life", .. })));
    }
}
