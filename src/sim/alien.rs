//! Alien attackers
//!
//! An alien drifts in a straight line and takes a shot on a fixed cadence. The
//! target is chosen only at fire time: the nearest asteroid in range, otherwise
//! the player. It never homes or leads its shots.

use glam::Vec2;

use super::collision::Hitbox;
use super::entity::{Body, Entity, EntityId, EntityKind, Peers};
use super::motion;
use super::projectile;
use super::world::World;
use crate::assets::SpritePool;
use crate::audio::SoundEffect;

#[derive(Debug, Clone)]
pub struct AlienState {
    /// Seconds until the next firing cycle
    pub fire_timer: f32,
}

/// Build an alien centred on `center` with a random heading
pub fn create(world: &mut World, center: Vec2) -> Entity {
    let id = world.next_entity_id();
    let sprite = world.pick_sprite(SpritePool::Alien);
    let tuning = world.tuning.alien.clone();

    let mut body = Body::with_sprite(sprite);
    body.hitbox = Hitbox::full(sprite.size);
    body.checking_collisions = true;
    body.wraps = true;
    body.set_center(center);
    let speed = world.random_in(tuning.speed);
    let heading = world.random_heading();
    body.set_motion(speed, heading);

    world.play(SoundEffect::AlienArrival);

    Entity::new(
        id,
        body,
        EntityKind::Alien(AlienState {
            fire_timer: tuning.fire_interval,
        }),
    )
}

/// Nearest asteroid strictly within `range` of `origin`, else the player
pub fn pick_target<'a>(origin: Vec2, candidates: impl Iterator<Item = &'a Entity>, range: f32) -> Option<Vec2> {
    let mut nearest: Option<(f32, Vec2)> = None;
    let mut player = None;

    for entity in candidates {
        if entity.is_asteroid() {
            let distance = origin.distance(entity.center());
            if distance < range && nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, entity.center()));
            }
        } else if entity.is_player() {
            player = Some(entity.center());
        }
    }

    nearest.map(|(_, at)| at).or(player)
}

impl AlienState {
    /// Remove asteroids crowding the arrival point, without splits or score
    pub(super) fn clear_spawn_zone(&self, body: &Body, live: &mut [Entity], world: &mut World) {
        let center = body.center();
        let zone = world.tuning.alien.spawn_kill_zone;
        let mut cleared = 0;

        for entity in live.iter_mut().filter(|e| e.is_alive()) {
            if entity.center().distance(center) >= zone {
                continue;
            }
            if let Some(asteroid) = entity.as_asteroid_mut() {
                asteroid.spawn_children = false;
                entity.dispose();
                cleared += 1;
            }
        }

        if cleared > 0 {
            log::debug!("Alien arrival cleared {cleared} asteroid(s)");
        }
    }

    pub(super) fn act(&mut self, id: EntityId, body: &mut Body, peers: &Peers<'_>, world: &mut World, dt: f32) {
        self.fire_timer -= dt;
        if self.fire_timer >= 0.0 {
            return;
        }

        let tuning = world.tuning.alien.clone();
        self.fire_timer = tuning.fire_interval;

        let speed = body.speed();
        let heading = world.random_heading();
        body.set_motion(speed, heading);

        let origin = body.center();
        let Some(target) = pick_target(origin, peers.iter(), tuning.target_range) else {
            return;
        };

        world.play(SoundEffect::AlienLaser);
        self.fire_timer = tuning.reload;

        let aim = motion::angle_to(origin, target);
        log::debug!("Alien {:?} fires at {aim:.0} degrees", id);
        let vel = motion::motion(tuning.bullet_speed, aim) + body.vel;
        let shot = projectile::bullet(world, id, origin, vel, tuning.bullet_life);
        world.spawn(shot);
    }

    pub(super) fn destroy(&self, body: &Body, world: &mut World) {
        let count = world.tuning.alien.dust;
        projectile::burst(world, body.center(), count);
    }
}

/// Foreign bullets kill and score; touching a live asteroid kills both
pub(super) fn collide(id: EntityId, body: &mut Body, other: &mut Entity, world: &mut World) {
    if other.bullet_owner().is_some() {
        if other.is_hostile_bullet_to(id) {
            other.dispose();
            body.dispose();
            let points = world.tuning.alien.score;
            world.award(points);
            world.play(SoundEffect::AlienExplosion);
        }
    } else if other.is_asteroid() && other.is_alive() {
        body.dispose();
        other.dispose();
    }
}
