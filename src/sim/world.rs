//! Per-session services shared by entity hooks
//!
//! Entities never hold references to the manager or the session. Everything a
//! hook may need besides its own state and its collision partner goes through
//! [`World`]: randomness, sprite pools, tuning, score, outgoing events and the
//! queue of entities to register once the current pass is over.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityId};
use super::state::GameEvent;
use crate::assets::{Sprite, SpritePool, SpriteSource};
use crate::audio::SoundEffect;
use crate::highscores::{HighScore, Scoreboard};
use crate::tuning::{Range, Tuning};

pub struct World {
    pub tuning: Tuning,
    /// Playfield size reported by the rendering surface
    pub playfield: Vec2,
    pub rng: Pcg32,
    sprites: Box<dyn SpriteSource>,
    scoreboard: Scoreboard,
    events: Vec<GameEvent>,
    spawn_queue: Vec<Entity>,
    game_over_due: bool,
    next_id: u32,
}

impl World {
    pub fn new(seed: u64, tuning: Tuning, sprites: Box<dyn SpriteSource>, high: HighScore) -> Self {
        let playfield = Vec2::new(tuning.playfield_width, tuning.playfield_height);
        Self {
            tuning,
            playfield,
            rng: Pcg32::seed_from_u64(seed),
            sprites,
            scoreboard: Scoreboard::new(high),
            events: Vec::new(),
            spawn_queue: Vec::new(),
            game_over_due: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID; IDs are never reused within a session
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn pick_sprite(&mut self, pool: SpritePool) -> Sprite {
        self.sprites.pick(pool, &mut self.rng)
    }

    /// Uniform sample from an inclusive range
    pub fn random_in(&mut self, range: Range) -> f32 {
        self.rng.random_range(range.min..=range.max)
    }

    /// Uniform heading in [0, 360)
    pub fn random_heading(&mut self) -> f32 {
        self.rng.random_range(0.0..360.0)
    }

    /// +1 or -1 with equal odds
    pub fn random_sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.events.push(GameEvent::Sound(effect));
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Credit points to the session and report the new score
    pub fn award(&mut self, points: u64) {
        let score = self.scoreboard.add(points);
        self.events.push(GameEvent::ScoreChanged(score));
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> HighScore {
        self.scoreboard.high_score()
    }

    /// Queue an entity; it joins the live set when the manager next flushes
    pub fn spawn(&mut self, entity: Entity) {
        self.spawn_queue.push(entity);
    }

    pub(crate) fn take_spawns(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.spawn_queue)
    }

    pub(crate) fn has_spawns(&self) -> bool {
        !self.spawn_queue.is_empty()
    }

    /// Ask the session to leave the playing state
    pub fn request_game_over(&mut self) {
        self.game_over_due = true;
    }

    pub(crate) fn take_game_over(&mut self) -> bool {
        std::mem::take(&mut self.game_over_due)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Forget everything from a previous run except the high score
    pub(crate) fn reset_session(&mut self) {
        self.scoreboard.reset();
        self.spawn_queue.clear();
        self.game_over_due = false;
        self.events.push(GameEvent::ScoreChanged(0));
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("playfield", &self.playfield)
            .field("scoreboard", &self.scoreboard)
            .field("pending_events", &self.events.len())
            .field("pending_spawns", &self.spawn_queue.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
