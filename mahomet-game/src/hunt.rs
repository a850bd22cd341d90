//! Snack-gallery resolution for the midpoint minigame.
//!
//! Models only the reward rules of the shooting gallery: a weighted spawn mix
//! of snack targets, a fixed shot budget, and a per-shot hit chance. The
//! rendering and input side of the gallery lives outside this crate; the
//! engine only ever sees the reward through [`MinigameBridge`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::bridge::MinigameBridge;
use crate::constants::{
    GALLERY_DEFAULT_HIT_CHANCE, GALLERY_DEFAULT_REWARD_CAP, GALLERY_DEFAULT_SHOTS,
};
use crate::journey::JourneyState;

/// One target kind in the spawn mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTarget {
    pub name: String,
    /// Spawn weight within the mix.
    pub weight: u32,
    /// Snacks awarded per hit.
    pub snack_value: u32,
}

/// Tuning for one gallery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub targets: Vec<GalleryTarget>,
    pub shots: u32,
    pub hit_chance: f32,
    pub reward_cap: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            targets: vec![
                GalleryTarget {
                    name: String::from("popcorn box"),
                    weight: 10,
                    snack_value: 2,
                },
                GalleryTarget {
                    name: String::from("corn dog"),
                    weight: 6,
                    snack_value: 4,
                },
                GalleryTarget {
                    name: String::from("golden pretzel"),
                    weight: 1,
                    snack_value: 12,
                },
            ],
            shots: GALLERY_DEFAULT_SHOTS,
            hit_chance: GALLERY_DEFAULT_HIT_CHANCE,
            reward_cap: GALLERY_DEFAULT_REWARD_CAP,
        }
    }
}

/// Resolve one gallery run: spawn a target per shot from the weighted mix,
/// roll the hit chance, and accumulate snack values up to the cap.
#[must_use]
pub fn run_snack_gallery<R: Rng>(cfg: &GalleryConfig, rng: &mut R) -> u32 {
    let total_weight: u32 = cfg.targets.iter().map(|target| target.weight).sum();
    if total_weight == 0 || cfg.shots == 0 {
        return 0;
    }

    let mut reward = 0_u32;
    for _ in 0..cfg.shots {
        let roll = rng.gen_range(0..total_weight);
        let mut running = 0_u32;
        let mut spawned = &cfg.targets[0];
        for target in &cfg.targets {
            running += target.weight;
            if roll < running {
                spawned = target;
                break;
            }
        }
        if rng.gen_range(0.0..1.0_f32) < cfg.hit_chance {
            reward = reward.saturating_add(spawned.snack_value);
        }
    }
    reward.min(cfg.reward_cap)
}

/// Default [`MinigameBridge`]: a headless gallery run with its own seeded RNG.
#[derive(Debug, Clone)]
pub struct SnackGalleryBridge {
    cfg: GalleryConfig,
    rng: ChaCha20Rng,
}

impl SnackGalleryBridge {
    #[must_use]
    pub fn new(cfg: GalleryConfig, seed: u64) -> Self {
        Self {
            cfg,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GalleryConfig::default(), seed)
    }
}

impl MinigameBridge for SnackGalleryBridge {
    fn trigger(&mut self, _state: &JourneyState) -> anyhow::Result<u32> {
        Ok(run_snack_gallery(&self.cfg, &mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_never_exceeds_cap() {
        let cfg = GalleryConfig {
            hit_chance: 1.0,
            ..GalleryConfig::default()
        };
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for _ in 0..100 {
            assert!(run_snack_gallery(&cfg, &mut rng) <= cfg.reward_cap);
        }
    }

    #[test]
    fn all_misses_pay_nothing() {
        let cfg = GalleryConfig {
            hit_chance: 0.0,
            ..GalleryConfig::default()
        };
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        assert_eq!(run_snack_gallery(&cfg, &mut rng), 0);
    }

    #[test]
    fn empty_mix_pays_nothing() {
        let cfg = GalleryConfig {
            targets: Vec::new(),
            ..GalleryConfig::default()
        };
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        assert_eq!(run_snack_gallery(&cfg, &mut rng), 0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let cfg = GalleryConfig::default();
        let mut rng_a = ChaCha20Rng::from_seed([4u8; 32]);
        let mut rng_b = ChaCha20Rng::from_seed([4u8; 32]);
        for _ in 0..20 {
            assert_eq!(
                run_snack_gallery(&cfg, &mut rng_a),
                run_snack_gallery(&cfg, &mut rng_b)
            );
        }
    }

    #[test]
    fn bridge_yields_reward_within_cap() {
        let mut bridge = SnackGalleryBridge::with_seed(99);
        let reward = bridge.trigger(&JourneyState::default()).unwrap();
        assert!(reward <= GalleryConfig::default().reward_cap);
    }
}
