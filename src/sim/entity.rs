//! Entities and their lifecycle hooks
//!
//! An entity is a [`Body`] (the state every object shares) plus an
//! [`EntityKind`] carrying the variant's own state. Hooks are dispatched by
//! matching on the kind; collision reactions look at the partner's kind
//! through the capability queries below rather than downcasting.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::alien::AlienState;
use super::asteroid::AsteroidState;
use super::collision::{Aabb, Hitbox};
use super::effects::{FlashState, GameOverTimer};
use super::motion;
use super::player::PlayerState;
use super::projectile::{BulletState, DustState};
use super::tick::TickInput;
use super::world::World;
use crate::assets::Sprite;
use crate::renderer::SpriteInstance;

/// Opaque entity handle, resolved through the manager each time it is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// State shared by every entity
#[derive(Debug, Clone)]
pub struct Body {
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
    /// Drawn size, also used for wraparound bounds
    pub size: Vec2,
    /// Degrees, counter-clockwise
    pub rotation: f32,
    pub vel: Vec2,
    pub sprite: Option<Sprite>,
    pub hitbox: Hitbox,
    pub checking_collisions: bool,
    pub wraps: bool,
    alive: bool,
}

impl Body {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            rotation: 0.0,
            vel: Vec2::ZERO,
            sprite: None,
            hitbox: Hitbox::default(),
            checking_collisions: false,
            wraps: false,
            alive: true,
        }
    }

    /// Body drawn with `sprite`, sized to it
    pub fn with_sprite(sprite: Sprite) -> Self {
        Self {
            size: sprite.size,
            sprite: Some(sprite),
            ..Self::new()
        }
    }

    /// Switch to `sprite`, resizing about the current centre
    pub fn set_sprite(&mut self, sprite: Sprite) {
        let center = self.center();
        self.size = sprite.size;
        self.sprite = Some(sprite);
        self.set_center(center);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn speed(&self) -> f32 {
        motion::speed(self.vel)
    }

    pub fn direction(&self) -> f32 {
        motion::direction(self.vel)
    }

    /// Replace the velocity with `speed` along `degrees`
    pub fn set_motion(&mut self, speed: f32, degrees: f32) {
        self.vel = motion::motion(speed, degrees);
    }

    /// Add `speed` along `degrees` to the current velocity
    pub fn add_motion(&mut self, speed: f32, degrees: f32) {
        self.vel += motion::motion(speed, degrees);
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark for removal; the destroy hook runs once when the manager reaps it
    pub fn dispose(&mut self) {
        self.alive = false;
    }

    /// World-space collision box, if this body takes part in collisions
    pub fn world_hitbox(&self) -> Option<Aabb> {
        (self.alive && self.checking_collisions).then(|| self.hitbox.at(self.pos))
    }

    /// Constant-velocity step followed by screen wraparound
    pub fn integrate(&mut self, dt: f32, playfield: Vec2) {
        self.pos += self.vel * dt;
        if self.wraps {
            self.pos = motion::wrap_sprite(self.pos, self.size, playfield);
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed set of entity variants
#[derive(Debug, Clone)]
pub enum EntityKind {
    Player(PlayerState),
    Asteroid(AsteroidState),
    Alien(AlienState),
    Bullet(BulletState),
    Dust(DustState),
    Flash(FlashState),
    GameOverTimer(GameOverTimer),
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, body: Body, kind: EntityKind) -> Self {
        Self { id, body, kind }
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn dispose(&mut self) {
        self.body.dispose();
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player(_))
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self.kind, EntityKind::Asteroid(_))
    }

    pub fn is_alien(&self) -> bool {
        matches!(self.kind, EntityKind::Alien(_))
    }

    /// Hostile to the player on contact
    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Asteroid(_) | EntityKind::Alien(_))
    }

    /// Firer of this entity if it is a bullet
    pub fn bullet_owner(&self) -> Option<EntityId> {
        match &self.kind {
            EntityKind::Bullet(bullet) => Some(bullet.owner),
            _ => None,
        }
    }

    /// True for a bullet fired by anyone other than `id`
    pub fn is_hostile_bullet_to(&self, id: EntityId) -> bool {
        self.bullet_owner().is_some_and(|owner| owner != id)
    }

    pub fn as_asteroid(&self) -> Option<&AsteroidState> {
        match &self.kind {
            EntityKind::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        }
    }

    pub fn as_asteroid_mut(&mut self) -> Option<&mut AsteroidState> {
        match &mut self.kind {
            EntityKind::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        }
    }

    /// Short tag for logs
    pub fn label(&self) -> &'static str {
        match self.kind {
            EntityKind::Player(_) => "player",
            EntityKind::Asteroid(_) => "asteroid",
            EntityKind::Alien(_) => "alien",
            EntityKind::Bullet(_) => "bullet",
            EntityKind::Dust(_) => "dust",
            EntityKind::Flash(_) => "flash",
            EntityKind::GameOverTimer(_) => "game-over-timer",
        }
    }

    /// Creation effects that reach into the live set, run at registration
    pub(crate) fn on_spawn(&mut self, live: &mut [Entity], world: &mut World) {
        if let EntityKind::Alien(alien) = &mut self.kind {
            alien.clear_spawn_zone(&self.body, live, world);
        }
    }

    /// Per-frame behaviour; `peers` is every other entity in the live set
    pub(crate) fn act(&mut self, peers: &Peers<'_>, world: &mut World, input: &TickInput, dt: f32) {
        let id = self.id;
        match &mut self.kind {
            EntityKind::Player(player) => player.act(id, &mut self.body, world, input, dt),
            EntityKind::Asteroid(asteroid) => asteroid.act(&mut self.body, dt),
            EntityKind::Alien(alien) => alien.act(id, &mut self.body, peers, world, dt),
            EntityKind::Bullet(bullet) => bullet.act(&mut self.body, dt),
            EntityKind::Dust(dust) => dust.act(&mut self.body, dt),
            EntityKind::Flash(flash) => flash.act(&mut self.body, dt),
            EntityKind::GameOverTimer(timer) => timer.act(&mut self.body, world, dt),
        }
    }

    /// React to overlapping `other`
    pub(crate) fn collide(&mut self, other: &mut Entity, world: &mut World) {
        let id = self.id;
        match self.kind {
            EntityKind::Player(_) => super::player::collide(id, &mut self.body, other, world),
            EntityKind::Asteroid(_) => super::asteroid::collide(&mut self.body, other, world),
            EntityKind::Alien(_) => super::alien::collide(id, &mut self.body, other, world),
            // Bullets are consumed by whatever they hit; dust and effects never collide
            EntityKind::Bullet(_)
            | EntityKind::Dust(_)
            | EntityKind::Flash(_)
            | EntityKind::GameOverTimer(_) => {}
        }
    }

    /// Destruction side effects; the manager calls this exactly once
    pub(crate) fn on_destroy(&self, world: &mut World) {
        match &self.kind {
            EntityKind::Player(player) => player.destroy(&self.body, world),
            EntityKind::Asteroid(asteroid) => asteroid.destroy(&self.body, world),
            EntityKind::Alien(alien) => alien.destroy(&self.body, world),
            EntityKind::Bullet(_)
            | EntityKind::Dust(_)
            | EntityKind::Flash(_)
            | EntityKind::GameOverTimer(_) => {}
        }
    }

    /// Draw data for this frame, if the entity is visible
    pub fn instance(&self) -> Option<SpriteInstance> {
        let sprite = self.body.sprite.as_ref()?;
        let alpha = match &self.kind {
            EntityKind::Flash(flash) => flash.alpha(),
            _ => 1.0,
        };
        Some(SpriteInstance::new(
            sprite,
            self.body.pos,
            self.body.size,
            self.body.rotation,
            alpha,
        ))
    }
}

/// Read-only view of every live entity except the one acting
pub struct Peers<'a> {
    before: &'a [Entity],
    after: &'a [Entity],
}

impl<'a> Peers<'a> {
    pub fn new(before: &'a [Entity], after: &'a [Entity]) -> Self {
        Self { before, after }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entity> + 'a {
        let (before, after) = (self.before, self.after);
        before.iter().chain(after).filter(|e| e.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_is_idempotent() {
        let mut body = Body::new();
        assert!(body.is_alive());
        body.dispose();
        body.dispose();
        assert!(!body.is_alive());
    }

    #[test]
    fn test_world_hitbox_requires_collisions_and_life() {
        let mut body = Body::new();
        body.size = Vec2::splat(10.0);
        body.hitbox = Hitbox::full(body.size);
        assert!(body.world_hitbox().is_none());

        body.checking_collisions = true;
        assert!(body.world_hitbox().is_some());

        body.dispose();
        assert!(body.world_hitbox().is_none());
    }

    #[test]
    fn test_integrate_wraps_when_enabled() {
        let field = Vec2::new(100.0, 100.0);
        let mut body = Body::new();
        body.size = Vec2::splat(10.0);
        body.pos = Vec2::new(95.0, 50.0);
        body.set_motion(10.0, 0.0);
        body.wraps = true;

        body.integrate(1.0, field);
        assert_eq!(body.pos.x, -10.0);

        body.wraps = false;
        body.pos = Vec2::new(95.0, 50.0);
        body.integrate(1.0, field);
        assert!((body.pos.x - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_center_roundtrip() {
        let mut body = Body::new();
        body.size = Vec2::new(40.0, 20.0);
        body.set_center(Vec2::new(100.0, 100.0));
        assert_eq!(body.pos, Vec2::new(80.0, 90.0));
        assert_eq!(body.center(), Vec2::new(100.0, 100.0));
    }
}
