//! Timed, non-interactive entities

use glam::Vec2;

use super::entity::{Body, Entity, EntityKind};
use super::state::GameEvent;
use super::world::World;
use crate::assets::SpritePool;

/// Full-screen white flash that fades out
#[derive(Debug, Clone)]
pub struct FlashState {
    pub life: f32,
    pub duration: f32,
}

impl FlashState {
    pub(super) fn act(&mut self, body: &mut Body, dt: f32) {
        self.life -= dt;
        if self.life <= 0.0 {
            body.dispose();
        }
    }

    /// Opacity, 1 when fresh and 0 once spent
    pub fn alpha(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.life / self.duration).clamp(0.0, 1.0)
    }
}

/// Flash covering the whole playfield
pub fn flash(world: &mut World) -> Entity {
    let id = world.next_entity_id();
    let sprite = world.pick_sprite(SpritePool::Flash);
    let duration = world.tuning.session.flash_duration;

    let mut body = Body::with_sprite(sprite);
    body.pos = Vec2::ZERO;
    body.size = world.playfield;

    Entity::new(id, body, EntityKind::Flash(FlashState { life: duration, duration }))
}

/// Invisible countdown that ends the session
#[derive(Debug, Clone)]
pub struct GameOverTimer {
    pub remaining: f32,
}

impl GameOverTimer {
    pub(super) fn act(&mut self, body: &mut Body, world: &mut World, dt: f32) {
        self.remaining -= dt;
        if self.remaining < 0.0 {
            log::info!("Game over, final score {}", world.score());
            world.emit(GameEvent::GameOver);
            world.request_game_over();
            body.dispose();
        }
    }
}

pub fn game_over_timer(world: &mut World, delay: f32) -> Entity {
    let id = world.next_entity_id();
    Entity::new(id, Body::new(), EntityKind::GameOverTimer(GameOverTimer { remaining: delay }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteSheet;
    use crate::highscores::HighScore;
    use crate::tuning::Tuning;

    fn world() -> World {
        World::new(9, Tuning::default(), Box::new(SpriteSheet::standard()), HighScore::new())
    }

    #[test]
    fn test_flash_fades_then_expires() {
        let mut world = world();
        let mut entity = flash(&mut world);
        assert_eq!(entity.body.size, world.playfield);
        assert!(entity.instance().is_some_and(|i| (i.alpha - 1.0).abs() < 1e-6));

        let EntityKind::Flash(state) = &mut entity.kind else {
            panic!("not a flash");
        };
        state.act(&mut entity.body, 0.25);
        assert!((state.alpha() - 0.5).abs() < 1e-4);
        assert!(entity.body.is_alive());
        state.act(&mut entity.body, 0.25);
        assert!(!entity.body.is_alive());
    }

    #[test]
    fn test_timer_requests_game_over_once_elapsed() {
        let mut world = world();
        let mut entity = game_over_timer(&mut world, 1.0);
        assert!(entity.instance().is_none());
        assert!(entity.body.world_hitbox().is_none());

        let EntityKind::GameOverTimer(timer) = &mut entity.kind else {
            panic!("not a timer");
        };
        timer.act(&mut entity.body, &mut world, 0.6);
        assert!(!world.take_game_over());
        timer.act(&mut entity.body, &mut world, 0.6);
        assert!(world.take_game_over());
        assert!(!entity.body.is_alive());
        assert!(world.events().contains(&GameEvent::GameOver));
    }
}
