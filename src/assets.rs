//! Sprite pools
//!
//! The simulation never loads textures. It asks a [`SpriteSource`] for a
//! random region out of a named pool and only cares about the region's size,
//! which drives collision boxes and screen wraparound.

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named sprite categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpritePool {
    Player,
    PlayerThrust,
    AsteroidLarge,
    AsteroidMedium,
    AsteroidSmall,
    Alien,
    Bullet,
    Dust,
    Flash,
}

impl SpritePool {
    pub const ALL: [SpritePool; 9] = [
        SpritePool::Player,
        SpritePool::PlayerThrust,
        SpritePool::AsteroidLarge,
        SpritePool::AsteroidMedium,
        SpritePool::AsteroidSmall,
        SpritePool::Alien,
        SpritePool::Bullet,
        SpritePool::Dust,
        SpritePool::Flash,
    ];

    /// Category name used by asset packs
    pub fn category(&self) -> &'static str {
        match self {
            SpritePool::Player => "players",
            SpritePool::PlayerThrust => "players-thrust",
            SpritePool::AsteroidLarge => "asteroids",
            SpritePool::AsteroidMedium => "asteroids-m",
            SpritePool::AsteroidSmall => "asteroids-s",
            SpritePool::Alien => "enemies",
            SpritePool::Bullet => "bullets",
            SpritePool::Dust => "dusts",
            SpritePool::Flash => "flash",
        }
    }
}

/// A concrete region picked from a pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub pool: SpritePool,
    /// Index of the region within its pool
    pub variant: u32,
    pub size: Vec2,
}

/// Supplies sprite regions by category
pub trait SpriteSource {
    /// Pick a random region from `pool`
    fn pick(&self, pool: SpritePool, rng: &mut dyn RngCore) -> Sprite;
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite pool '{0}' has no regions")]
    EmptyPool(&'static str),
    #[error("sprite region {index} in pool '{pool}' has non-positive size")]
    BadRegion { pool: &'static str, index: usize },
}

/// Region sizes per pool, validated up front so picking can't fail mid-frame
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pools: HashMap<SpritePool, Vec<Vec2>>,
}

impl SpriteSheet {
    /// Build a sheet; every pool in [`SpritePool::ALL`] must have a region
    pub fn new(pools: HashMap<SpritePool, Vec<Vec2>>) -> Result<Self, AssetError> {
        for pool in SpritePool::ALL {
            let regions = pools
                .get(&pool)
                .filter(|r| !r.is_empty())
                .ok_or(AssetError::EmptyPool(pool.category()))?;
            if let Some(index) = regions.iter().position(|s| s.x <= 0.0 || s.y <= 0.0) {
                return Err(AssetError::BadRegion {
                    pool: pool.category(),
                    index,
                });
            }
        }
        Ok(Self { pools })
    }

    /// Built-in region sizes matching the stock art
    pub fn standard() -> Self {
        let pools = HashMap::from([
            (SpritePool::Player, vec![Vec2::new(32.0, 32.0)]),
            (SpritePool::PlayerThrust, vec![Vec2::new(32.0, 32.0)]),
            (
                SpritePool::AsteroidLarge,
                vec![Vec2::new(96.0, 96.0), Vec2::new(90.0, 88.0)],
            ),
            (
                SpritePool::AsteroidMedium,
                vec![Vec2::new(48.0, 48.0), Vec2::new(44.0, 46.0)],
            ),
            (
                SpritePool::AsteroidSmall,
                vec![Vec2::new(24.0, 24.0), Vec2::new(22.0, 20.0)],
            ),
            (SpritePool::Alien, vec![Vec2::new(40.0, 24.0)]),
            (SpritePool::Bullet, vec![Vec2::new(4.0, 4.0)]),
            (SpritePool::Dust, vec![Vec2::new(3.0, 3.0), Vec2::new(2.0, 2.0)]),
            (SpritePool::Flash, vec![Vec2::new(1.0, 1.0)]),
        ]);
        Self { pools }
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::standard()
    }
}

impl SpriteSource for SpriteSheet {
    fn pick(&self, pool: SpritePool, rng: &mut dyn RngCore) -> Sprite {
        // Pools are checked in `new`; `standard` fills every pool
        let regions = self.pools.get(&pool).map(Vec::as_slice).unwrap_or(&[]);
        if regions.is_empty() {
            return Sprite {
                pool,
                variant: 0,
                size: Vec2::ONE,
            };
        }
        let variant = rng.random_range(0..regions.len());
        Sprite {
            pool,
            variant: variant as u32,
            size: regions[variant],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_standard_sheet_validates() {
        let sheet = SpriteSheet::standard();
        assert!(SpriteSheet::new(sheet.pools.clone()).is_ok());
    }

    #[test]
    fn test_missing_pool_is_config_error() {
        let mut pools = SpriteSheet::standard().pools;
        pools.remove(&SpritePool::Alien);
        let err = SpriteSheet::new(pools).unwrap_err();
        assert!(matches!(err, AssetError::EmptyPool("enemies")));
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let sheet = SpriteSheet::standard();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..32 {
            let sprite = sheet.pick(SpritePool::AsteroidLarge, &mut rng);
            assert_eq!(sprite.pool, SpritePool::AsteroidLarge);
            assert!(sprite.variant < 2);
            assert!(sprite.size.x >= 90.0);
        }
    }
}
