//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies beyond the draw seam

pub mod alien;
pub mod asteroid;
pub mod collision;
pub mod effects;
pub mod entity;
pub mod manager;
pub mod motion;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod world;

pub use asteroid::AsteroidSize;
pub use collision::{Aabb, Hitbox, overlapping_pairs};
pub use entity::{Body, Entity, EntityId, EntityKind};
pub use manager::EntityManager;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Keys, TickInput, spawn_alien, spawn_wave, start, tick};
pub use world::World;
