//! The player's ship

use glam::Vec2;

use super::collision::Hitbox;
use super::effects;
use super::entity::{Body, Entity, EntityId, EntityKind};
use super::motion;
use super::projectile;
use super::state::GameEvent;
use super::tick::TickInput;
use super::world::World;
use crate::assets::{Sprite, SpritePool};
use crate::audio::SoundEffect;

#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Counts down after a shot; firing is allowed once it goes negative
    pub fire_cooldown: f32,
    pub thrusting: bool,
    idle_sprite: Sprite,
    thrust_sprite: Sprite,
}

/// Build the ship centred on `center`, at rest and facing +x
pub fn create(world: &mut World, center: Vec2) -> Entity {
    let id = world.next_entity_id();
    let idle_sprite = world.pick_sprite(SpritePool::Player);
    let thrust_sprite = world.pick_sprite(SpritePool::PlayerThrust);

    let mut body = Body::with_sprite(idle_sprite);
    body.hitbox = Hitbox::inset_half(idle_sprite.size);
    body.checking_collisions = true;
    body.wraps = true;
    body.set_center(center);

    Entity::new(
        id,
        body,
        EntityKind::Player(PlayerState {
            fire_cooldown: -1.0,
            thrusting: false,
            idle_sprite,
            thrust_sprite,
        }),
    )
}

impl PlayerState {
    pub(super) fn act(&mut self, id: EntityId, body: &mut Body, world: &mut World, input: &TickInput, dt: f32) {
        let tuning = world.tuning.player.clone();

        self.fire_cooldown -= dt;
        if self.fire_cooldown < 0.0 {
            self.fire_cooldown = -1.0;
        }

        self.thrusting = input.held.thrust;
        let sprite = if self.thrusting {
            self.thrust_sprite
        } else {
            self.idle_sprite
        };
        if body.sprite != Some(sprite) {
            body.set_sprite(sprite);
            body.hitbox = Hitbox::inset_half(sprite.size);
        }

        if input.held.rotate_left {
            body.rotation += tuning.rotate_speed * dt;
        } else if input.held.rotate_right {
            body.rotation -= tuning.rotate_speed * dt;
        }
        body.rotation = crate::normalize_degrees(body.rotation);

        if self.thrusting {
            body.add_motion(tuning.thrust * dt, body.rotation);
        }
        body.vel = motion::cap_speed(body.vel, tuning.max_speed);

        if input.pressed.thrust {
            world.play(SoundEffect::Thruster);
        }

        if input.pressed.fire && self.fire_cooldown < 0.0 {
            self.fire_cooldown = tuning.fire_cooldown;
            world.play(SoundEffect::Laser);

            let nose = body.center() + motion::heading(body.rotation) * (body.size.x / 2.0);
            let vel = motion::motion(tuning.bullet_speed, body.rotation) + body.vel;
            let shot = projectile::bullet(world, id, nose, vel, tuning.bullet_life);
            world.spawn(shot);
        }
    }

    pub(super) fn destroy(&self, body: &Body, world: &mut World) {
        log::info!("Player destroyed at ({:.0}, {:.0})", body.center().x, body.center().y);
        world.play(SoundEffect::Explosion);
        world.play(SoundEffect::GameOver);
        world.emit(GameEvent::PlayerDestroyed);

        let flash = effects::flash(world);
        world.spawn(flash);
        let delay = world.tuning.session.game_over_delay;
        let timer = effects::game_over_timer(world, delay);
        world.spawn(timer);
    }
}

/// Enemy fire or contact with an enemy kills the ship (and the enemy)
pub(super) fn collide(id: EntityId, body: &mut Body, other: &mut Entity, _world: &mut World) {
    if other.bullet_owner().is_some() {
        if other.is_hostile_bullet_to(id) {
            other.dispose();
            body.dispose();
        }
    } else if other.is_enemy() {
        other.dispose();
        body.dispose();
    }
}
