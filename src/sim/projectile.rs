//! Bullets and dust
//!
//! Both fly in a straight line until their lifetime runs out. Bullets wrap and
//! collide; dust is cosmetic only.

use glam::Vec2;

use super::collision::Hitbox;
use super::entity::{Body, Entity, EntityId, EntityKind};
use super::world::World;
use crate::assets::SpritePool;

#[derive(Debug, Clone)]
pub struct BulletState {
    /// Entity that fired this bullet; its own shots never hurt it
    pub owner: EntityId,
    /// Seconds left before the bullet fizzles
    pub life: f32,
}

impl BulletState {
    pub(super) fn act(&mut self, body: &mut Body, dt: f32) {
        self.life -= dt;
        if self.life < 0.0 {
            body.dispose();
        }
    }
}

/// Fire a bullet centred on `center` with an absolute velocity
pub fn bullet(world: &mut World, owner: EntityId, center: Vec2, vel: Vec2, life: f32) -> Entity {
    let id = world.next_entity_id();
    let sprite = world.pick_sprite(SpritePool::Bullet);

    let mut body = Body::with_sprite(sprite);
    body.hitbox = Hitbox::full(sprite.size);
    body.checking_collisions = true;
    body.wraps = true;
    body.set_center(center);
    body.vel = vel;

    Entity::new(id, body, EntityKind::Bullet(BulletState { owner, life }))
}

#[derive(Debug, Clone)]
pub struct DustState {
    pub life: f32,
}

impl DustState {
    pub(super) fn act(&mut self, body: &mut Body, dt: f32) {
        self.life -= dt;
        if self.life < 0.0 {
            body.dispose();
        }
    }
}

/// One dust particle drifting away from `center`
pub fn dust(world: &mut World, center: Vec2) -> Entity {
    let id = world.next_entity_id();
    let sprite = world.pick_sprite(SpritePool::Dust);
    let tuning = world.tuning.dust.clone();

    let mut body = Body::with_sprite(sprite);
    body.set_center(center);
    let life = world.random_in(tuning.life);
    let speed = world.random_in(tuning.speed);
    let heading = world.random_heading();
    body.set_motion(speed, heading);

    Entity::new(id, body, EntityKind::Dust(DustState { life }))
}

/// Queue `count` dust particles at `center`
pub fn burst(world: &mut World, center: Vec2, count: u32) {
    for _ in 0..count {
        let particle = dust(world, center);
        world.spawn(particle);
    }
}
