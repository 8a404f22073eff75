//! Fixed timestep simulation tick
//!
//! Session control on top of the entity manager: starting a run, wave
//! progression when the asteroid field empties, and periodic alien arrivals.

use glam::Vec2;

use super::alien;
use super::asteroid::{self, AsteroidSize};
use super::entity::EntityId;
use super::motion;
use super::player;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;

/// Key set for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys currently down
    pub held: Keys,
    /// Keys that went down since the previous tick
    pub pressed: Keys,
}

impl TickInput {
    /// Derive this frame's presses from the previous frame's held keys
    pub fn from_keys(held: Keys, previous: Keys) -> Self {
        Self {
            held,
            pressed: Keys {
                rotate_left: held.rotate_left && !previous.rotate_left,
                rotate_right: held.rotate_right && !previous.rotate_right,
                thrust: held.thrust && !previous.thrust,
                fire: held.fire && !previous.fire,
            },
        }
    }
}

/// Begin a run: fresh score, a ship in the middle and the first wave
pub fn start(state: &mut GameState) {
    state.entities.clear();
    state.world.reset_session();
    state.phase = GamePhase::Playing;
    state.time_ticks = 0;
    state.difficulty = state.world.tuning.session.start_difficulty;
    state.alien_timer = state.world.tuning.session.alien_interval;

    let center = state.world.playfield / 2.0;
    let ship = player::create(&mut state.world, center);
    state.spawn(ship);

    spawn_wave(state);
    state.world.play(SoundEffect::Intro);
    log::info!("Session started (seed {}, difficulty {})", state.seed, state.difficulty);
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    state.entities.update(&mut state.world, input, dt);

    if state.world.take_game_over() {
        state.phase = GamePhase::GameOver;
        return;
    }

    if state.entities.asteroid_count() == 0 {
        state.difficulty += 1;
        spawn_wave(state);
    }

    state.alien_timer -= dt;
    if state.alien_timer < 0.0 {
        state.alien_timer = state.world.tuning.session.alien_interval;
        spawn_alien(state);
    }
}

/// Random point on the spawn circle around the player, folded onto the field
fn spawn_point(state: &mut GameState, anchor: Vec2) -> Vec2 {
    let radius = state.world.tuning.session.spawn_radius;
    let heading = state.world.random_heading();
    motion::wrap_point(anchor + motion::motion(radius, heading), state.world.playfield)
}

/// Spawn `difficulty` large asteroids around the player
pub fn spawn_wave(state: &mut GameState) {
    let anchor = match state.player() {
        Some(player) => player.center(),
        None => state.world.playfield / 2.0,
    };

    for _ in 0..state.difficulty {
        let at = spawn_point(state, anchor);
        let rock = asteroid::create(&mut state.world, AsteroidSize::Large, at);
        state.spawn(rock);
    }

    let difficulty = state.difficulty;
    state.world.emit(GameEvent::WaveSpawned { difficulty });
    log::info!("Wave of {difficulty} asteroids");
}

/// Spawn one alien near the player; nothing happens without a player
pub fn spawn_alien(state: &mut GameState) -> Option<EntityId> {
    let Some(anchor) = state.player().map(|p| p.center()) else {
        log::warn!("Alien arrival skipped, no player alive");
        return None;
    };

    let at = spawn_point(state, anchor);
    let visitor = alien::create(&mut state.world, at);
    let id = visitor.id;
    state.spawn(visitor);
    state.world.emit(GameEvent::AlienSpawned(id));
    log::info!("Alien {:?} arrived at ({:.0}, {:.0})", id, at.x, at.y);
    Some(id)
}
