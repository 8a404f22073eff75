//! Entity manager
//!
//! Owns the live set and runs each frame in three passes: every entity acts
//! and moves, then overlapping pairs resolve their collisions, then dead
//! entities are reaped and anything spawned along the way is registered.
//! Registration and reaping repeat until nothing new is queued, so
//! destruction hooks that spawn (or kill) other entities settle within the
//! frame.

use super::collision::{self, Aabb};
use super::entity::{Entity, EntityId, Peers};
use super::tick::TickInput;
use super::world::World;
use crate::renderer::Renderer;

#[derive(Debug, Default)]
pub struct EntityManager {
    /// Live entities in registration order
    entities: Vec<Entity>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `entity` and register it right away
    pub fn spawn(&mut self, entity: Entity, world: &mut World) {
        world.spawn(entity);
        self.flush(world);
    }

    /// Advance one frame
    pub fn update(&mut self, world: &mut World, input: &TickInput, dt: f32) {
        let playfield = world.playfield;
        for i in 0..self.entities.len() {
            let (before, rest) = self.entities.split_at_mut(i);
            let Some((entity, after)) = rest.split_first_mut() else {
                break;
            };
            if !entity.is_alive() {
                continue;
            }
            let peers = Peers::new(before, after);
            entity.act(&peers, world, input, dt);
            entity.body.integrate(dt, playfield);
        }

        self.collisions(world);
        self.flush(world);
    }

    /// Resolve every overlapping pair, each side reacting once
    fn collisions(&mut self, world: &mut World) {
        let boxes: Vec<Option<Aabb>> = self.entities.iter().map(|e| e.body.world_hitbox()).collect();

        for (i, j) in collision::overlapping_pairs(&boxes) {
            let (head, tail) = self.entities.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            // An earlier pair this frame may already have killed one side
            if !a.is_alive() || !b.is_alive() {
                continue;
            }
            a.collide(b, world);
            b.collide(a, world);
        }
    }

    /// Reap the dead and register queued spawns until both settle
    fn flush(&mut self, world: &mut World) {
        loop {
            self.reap(world);
            if !world.has_spawns() {
                break;
            }
            for mut entity in world.take_spawns() {
                entity.on_spawn(&mut self.entities, world);
                log::trace!("Spawned {} {:?}", entity.label(), entity.id);
                self.entities.push(entity);
            }
        }
    }

    /// Remove dead entities, running each one's destroy hook exactly once
    fn reap(&mut self, world: &mut World) {
        if self.entities.iter().all(|e| e.is_alive()) {
            return;
        }
        let (live, dead): (Vec<Entity>, Vec<Entity>) =
            std::mem::take(&mut self.entities).into_iter().partition(|e| e.is_alive());
        self.entities = live;
        for entity in &dead {
            entity.on_destroy(world);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for instance in self.entities.iter().filter_map(|e| e.instance()) {
            renderer.draw(instance);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// The live player, if any. At most one is expected.
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_alive() && e.is_player())
    }

    pub fn asteroid_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_alive() && e.is_asteroid()).count()
    }

    /// Drop everything without running destroy hooks
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteSheet;
    use crate::highscores::HighScore;
    use crate::renderer::InstanceBuffer;
    use crate::sim::asteroid::{self, AsteroidSize};
    use crate::sim::entity::EntityKind;
    use crate::sim::{alien, player, projectile};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn world(seed: u64) -> World {
        World::new(seed, Tuning::default(), Box::new(SpriteSheet::standard()), HighScore::new())
    }

    fn still(mut entity: Entity) -> Entity {
        entity.body.vel = Vec2::ZERO;
        if let EntityKind::Asteroid(state) = &mut entity.kind {
            state.rotation_speed = 0.0;
        }
        entity
    }

    #[test]
    fn test_bullet_hit_splits_within_the_frame() {
        let mut world = world(1);
        let mut manager = EntityManager::new();
        let rock = still(asteroid::create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 200.0)));
        manager.spawn(rock, &mut world);
        let shooter = world.next_entity_id();
        let shot = projectile::bullet(&mut world, shooter, Vec2::new(200.0, 200.0), Vec2::ZERO, 1.0);
        manager.spawn(shot, &mut world);

        manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

        assert_eq!(world.score(), 10);
        assert_eq!(manager.len(), 3);
        assert!(manager.iter().all(|e| e.as_asteroid().is_some_and(|a| a.size == AsteroidSize::Medium)));
    }

    #[test]
    fn test_later_registered_side_also_reacts() {
        let mut world = world(6);
        let mut manager = EntityManager::new();
        let shooter = world.next_entity_id();
        let shot = projectile::bullet(&mut world, shooter, Vec2::new(200.0, 200.0), Vec2::ZERO, 1.0);
        manager.spawn(shot, &mut world);
        let rock = still(asteroid::create(&mut world, AsteroidSize::Large, Vec2::new(200.0, 200.0)));
        let rock_id = rock.id;
        manager.spawn(rock, &mut world);

        // The bullet comes first in the pair and has no reaction of its own
        manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

        assert!(manager.get(rock_id).is_none());
        assert_eq!(world.score(), 10);
        assert_eq!(manager.iter().filter(|e| e.bullet_owner().is_some()).count(), 0);
        assert_eq!(manager.asteroid_count(), 3);
    }

    #[test]
    fn test_player_registered_after_asteroid_still_dies() {
        let mut world = world(7);
        let mut manager = EntityManager::new();
        let rock = still(asteroid::create(&mut world, AsteroidSize::Medium, Vec2::new(400.0, 300.0)));
        manager.spawn(rock, &mut world);
        let ship = player::create(&mut world, Vec2::new(400.0, 300.0));
        manager.spawn(ship, &mut world);

        manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

        assert!(manager.player().is_none());
        assert!(manager.iter().any(|e| matches!(e.kind, EntityKind::GameOverTimer(_))));
        assert_eq!(manager.asteroid_count(), 3);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_dead_pair_member_is_skipped() {
        let mut world = world(2);
        let mut manager = EntityManager::new();
        let rock = still(asteroid::create(&mut world, AsteroidSize::Small, Vec2::new(300.0, 300.0)));
        manager.spawn(rock, &mut world);
        let shooter = world.next_entity_id();
        for _ in 0..2 {
            let shot = projectile::bullet(&mut world, shooter, Vec2::new(300.0, 300.0), Vec2::ZERO, 1.0);
            manager.spawn(shot, &mut world);
        }

        manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

        // One bullet consumed with the asteroid, the other flies on
        assert_eq!(world.score(), 10);
        assert_eq!(manager.iter().filter(|e| e.bullet_owner().is_some()).count(), 1);
        assert_eq!(manager.asteroid_count(), 0);
    }

    #[test]
    fn test_alien_arrival_clears_nearby_asteroid() {
        let mut world = world(3);
        let mut manager = EntityManager::new();
        let rock = still(asteroid::create(&mut world, AsteroidSize::Large, Vec2::new(400.0, 300.0)));
        manager.spawn(rock, &mut world);

        let visitor = alien::create(&mut world, Vec2::new(420.0, 310.0));
        manager.spawn(visitor, &mut world);

        assert_eq!(manager.asteroid_count(), 0);
        assert_eq!(manager.len(), 1);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_player_death_leaves_effects() {
        let mut world = world(4);
        let mut manager = EntityManager::new();
        let ship = player::create(&mut world, Vec2::new(400.0, 300.0));
        let ship_id = ship.id;
        manager.spawn(ship, &mut world);
        let rock = still(asteroid::create(&mut world, AsteroidSize::Medium, Vec2::new(400.0, 300.0)));
        manager.spawn(rock, &mut world);

        manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

        assert!(manager.get(ship_id).is_none());
        assert!(manager.player().is_none());
        assert!(manager.iter().any(|e| matches!(e.kind, EntityKind::Flash(_))));
        assert!(manager.iter().any(|e| matches!(e.kind, EntityKind::GameOverTimer(_))));
        // The asteroid went down with the ship and split
        assert_eq!(manager.asteroid_count(), 3);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_draw_emits_visible_entities_only() {
        let mut world = world(5);
        let mut manager = EntityManager::new();
        let ship = player::create(&mut world, Vec2::new(400.0, 300.0));
        manager.spawn(ship, &mut world);
        let timer = crate::sim::effects::game_over_timer(&mut world, 1.0);
        manager.spawn(timer, &mut world);

        let mut buffer = InstanceBuffer::new();
        manager.draw(&mut buffer);
        assert_eq!(manager.len(), 2);
        assert_eq!(buffer.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_each_kill_is_destroyed_once(seed in 0u64..500, count in 1usize..12) {
            let mut world = world(seed);
            let mut manager = EntityManager::new();
            for _ in 0..count {
                let x = world.random_in(crate::tuning::Range::new(100.0, 700.0));
                let y = world.random_in(crate::tuning::Range::new(100.0, 500.0));
                let rock = still(asteroid::create(&mut world, AsteroidSize::Small, Vec2::new(x, y)));
                manager.spawn(rock, &mut world);
            }
            let ids: Vec<EntityId> = manager.iter().map(|e| e.id).collect();
            for id in &ids {
                if let Some(entity) = manager.get_mut(*id) {
                    entity.dispose();
                    entity.dispose();
                }
            }

            manager.update(&mut world, &TickInput::default(), 1.0 / 60.0);

            // Three dust per small asteroid, no more
            prop_assert_eq!(manager.len(), count * 3);
            prop_assert!(manager.iter().all(|e| matches!(e.kind, EntityKind::Dust(_))));
        }
    }
}
