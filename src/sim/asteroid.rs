//! Asteroids
//!
//! Three size tiers, identical apart from sprite pool and what they break
//! into: large and medium split into three of the next tier down, small ones
//! crumble into dust.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::entity::{Body, Entity, EntityKind};
use super::projectile;
use super::world::World;
use crate::assets::SpritePool;
use crate::audio::SoundEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn pool(&self) -> SpritePool {
        match self {
            AsteroidSize::Large => SpritePool::AsteroidLarge,
            AsteroidSize::Medium => SpritePool::AsteroidMedium,
            AsteroidSize::Small => SpritePool::AsteroidSmall,
        }
    }

    /// Tier produced when this one breaks, if any
    pub fn split(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AsteroidState {
    pub size: AsteroidSize,
    /// Degrees per second, either sign
    pub rotation_speed: f32,
    /// Cleared when the asteroid is removed to make room for an alien
    pub spawn_children: bool,
}

/// Build an asteroid centred on `center` with random drift and spin
pub fn create(world: &mut World, size: AsteroidSize, center: Vec2) -> Entity {
    let id = world.next_entity_id();
    let sprite = world.pick_sprite(size.pool());
    let tuning = world.tuning.asteroid.clone();

    let mut body = Body::with_sprite(sprite);
    body.hitbox = Hitbox::full(sprite.size);
    body.checking_collisions = true;
    body.wraps = true;
    body.set_center(center);
    let speed = world.random_in(tuning.speed);
    let heading = world.random_heading();
    body.set_motion(speed, heading);

    let rotation_speed = world.random_sign() * world.random_in(tuning.spin);

    Entity::new(
        id,
        body,
        EntityKind::Asteroid(AsteroidState {
            size,
            rotation_speed,
            spawn_children: true,
        }),
    )
}

impl AsteroidState {
    pub(super) fn act(&mut self, body: &mut Body, dt: f32) {
        body.rotation = crate::normalize_degrees(body.rotation + self.rotation_speed * dt);
    }

    pub(super) fn destroy(&self, body: &Body, world: &mut World) {
        let center = body.center();
        let count = world.tuning.asteroid.children;
        match self.size.split() {
            Some(child) => {
                if !self.spawn_children {
                    return;
                }
                log::debug!("{:?} asteroid split into {} {:?}", self.size, count, child);
                for _ in 0..count {
                    let fragment = create(world, child, center);
                    world.spawn(fragment);
                }
            }
            None => projectile::burst(world, center, count),
        }
    }
}

/// Any bullet breaks an asteroid and scores
pub(super) fn collide(body: &mut Body, other: &mut Entity, world: &mut World) {
    if other.bullet_owner().is_some() {
        other.dispose();
        body.dispose();
        let points = world.tuning.asteroid.score;
        world.award(points);
        world.play(SoundEffect::Explosion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteSheet;
    use crate::highscores::HighScore;
    use crate::sim::state::GameEvent;
    use crate::tuning::Tuning;

    fn world() -> World {
        World::new(42, Tuning::default(), Box::new(SpriteSheet::standard()), HighScore::new())
    }

    fn spawned(world: &mut World) -> Vec<Entity> {
        world.take_spawns()
    }

    #[test]
    fn test_create_randomizes_within_tuning() {
        let mut world = world();
        for _ in 0..50 {
            let asteroid = create(&mut world, AsteroidSize::Large, Vec2::new(100.0, 100.0));
            let state = asteroid.as_asteroid().unwrap();
            let speed = asteroid.body.speed();
            assert!((49.9..=150.1).contains(&speed));
            assert!((25.0..=100.0).contains(&state.rotation_speed.abs()));
            assert!(state.spawn_children);
            assert!(asteroid.body.wraps && asteroid.body.checking_collisions);
            assert!((asteroid.center() - Vec2::new(100.0, 100.0)).length() < 1e-3);
        }
    }

    #[test]
    fn test_large_splits_into_three_medium_at_center() {
        let mut world = world();
        let parent = create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 150.0));
        parent.on_destroy(&mut world);

        let children = spawned(&mut world);
        assert_eq!(children.len(), 3);
        for child in &children {
            assert_eq!(child.as_asteroid().unwrap().size, AsteroidSize::Medium);
            assert!((child.center() - parent.center()).length() < 1e-3);
        }
    }

    #[test]
    fn test_suppressed_split_spawns_nothing() {
        let mut world = world();
        let mut parent = create(&mut world, AsteroidSize::Medium, Vec2::new(200.0, 150.0));
        parent.as_asteroid_mut().unwrap().spawn_children = false;
        parent.on_destroy(&mut world);
        assert!(spawned(&mut world).is_empty());
    }

    #[test]
    fn test_small_crumbles_into_dust() {
        let mut world = world();
        let parent = create(&mut world, AsteroidSize::Small, Vec2::new(200.0, 150.0));
        parent.on_destroy(&mut world);

        let debris = spawned(&mut world);
        assert_eq!(debris.len(), 3);
        assert!(debris.iter().all(|e| matches!(e.kind, EntityKind::Dust(_))));
        assert!(debris.iter().all(|e| !e.is_asteroid()));
    }

    #[test]
    fn test_bullet_hit_scores_and_disposes_both() {
        let mut world = world();
        let mut asteroid = create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 150.0));
        let shooter = world.next_entity_id();
        let mut bullet = projectile::bullet(&mut world, shooter, Vec2::new(200.0, 150.0), Vec2::ZERO, 1.0);

        asteroid.collide(&mut bullet, &mut world);
        assert!(!asteroid.is_alive());
        assert!(!bullet.is_alive());
        assert_eq!(world.score(), 10);
        assert!(world.events().contains(&GameEvent::Sound(SoundEffect::Explosion)));
    }

    #[test]
    fn test_asteroids_ignore_each_other() {
        let mut world = world();
        let mut a = create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 150.0));
        let mut b = create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 150.0));
        a.collide(&mut b, &mut world);
        assert!(a.is_alive() && b.is_alive());
    }
}
