//! The journey state machine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::critical::check_critical_conditions;
use crate::data::{CatalogError, GameData};
use crate::dynamic::{EventOutcome, resolve_dynamic};
use crate::journey::{
    Ending, GamePhase, JourneyCfg, JourneyConfigError, JourneyState, LogTone, StepOutcome,
};
use crate::resources::ResourceKey;
use crate::selection::pick_event;

/// Construction failures. Both variants are load-time: once an engine exists,
/// stepping never errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] JourneyConfigError),
}

/// Drives progression for one journey at a time.
///
/// Owns the validated catalog, the tuning config, and the RNG; the journey
/// state itself is owned by the caller and passed in by reference. Each
/// `step()` runs to completion in this fixed order: critical check, distance
/// advance, midpoint check, victory check, event draw. The order never
/// changes; later stages rely on earlier ones not having ended the game.
#[derive(Debug, Clone)]
pub struct JourneyEngine {
    data: GameData,
    cfg: JourneyCfg,
    rng: ChaCha20Rng,
    seed: u64,
}

impl JourneyEngine {
    /// Build an engine over a catalog, failing fast on any configuration
    /// problem so misconfiguration presents as a startup failure rather than
    /// a mid-game crash.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the catalog or config is invalid.
    pub fn new(data: GameData, cfg: JourneyCfg, seed: u64) -> Result<Self, EngineError> {
        data.validate()?;
        cfg.validate()?;
        Ok(Self {
            data,
            cfg,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
        })
    }

    /// Fresh journey state for this engine's data, already underway.
    #[must_use]
    pub fn start(&self) -> JourneyState {
        let mut state = JourneyState::new(
            self.data.starting_resources,
            self.data.game.total_distance,
        );
        state.phase = GamePhase::InProgress;
        state.push_log("Your journey begins...", LogTone::Important);
        state
    }

    /// Advance the journey by one continue action.
    pub fn step(&mut self, state: &mut JourneyState) -> StepOutcome {
        if state.phase != GamePhase::InProgress {
            return StepOutcome::Unchanged;
        }
        if state.minigame_pending {
            log::warn!("step ignored: minigame completion is pending");
            return StepOutcome::Unchanged;
        }
        state.steps += 1;

        // Critical conditions end the journey before any further mutation.
        if let Some(event) = check_critical_conditions(&self.data, &state.resources) {
            let event = event.clone();
            state.phase = GamePhase::Defeated;
            state.ending = Some(Ending::Defeat {
                event_id: event.id.clone(),
            });
            state.push_log(event.title.clone(), LogTone::Negative);
            return StepOutcome::CriticalEventFired { event };
        }

        let previous = state.distance_traveled;
        let progress = self
            .rng
            .gen_range(self.cfg.progress_min_miles..=self.cfg.progress_max_miles);
        state.distance_traveled = previous + progress;

        let midpoint = state.midpoint();
        if !state.midpoint_triggered && previous < midpoint && state.distance_traveled >= midpoint {
            state.midpoint_triggered = true;
            state.minigame_pending = true;
            state.push_log("Halfway there. A snack gallery appears!", LogTone::Important);
            return StepOutcome::MidpointReached;
        }

        if state.distance_traveled >= state.total_distance {
            state.phase = GamePhase::Victory;
            state.ending = Some(Ending::Victory);
            state.push_log(self.data.victory.title.clone(), LogTone::Important);
            return StepOutcome::Victory {
                resources: state.resources.snapshot(),
            };
        }

        self.draw_and_apply_event(state)
    }

    fn draw_and_apply_event(&mut self, state: &mut JourneyState) -> StepOutcome {
        let Some(pick) = pick_event(&self.data, &mut self.rng) else {
            // Unreachable for a validated catalog; kept non-fatal regardless.
            log::warn!("weighted pool is empty; no event drawn this step");
            return StepOutcome::Unchanged;
        };
        let event = pick.event.clone();

        let outcome = match event.dynamic {
            Some(handler) => resolve_dynamic(handler, &event, state, &mut self.rng),
            None => EventOutcome::from_static(&event),
        };

        outcome.effects.apply_to(&mut state.resources);
        let tone = if event.kind.is_negative() {
            LogTone::Negative
        } else if event.effects.is_empty() && outcome.effects.is_empty() {
            LogTone::Neutral
        } else {
            LogTone::Positive
        };
        state.push_log(outcome.title.clone(), tone);

        StepOutcome::EventApplied {
            event,
            outcome,
            resources: state.resources.snapshot(),
        }
    }

    /// Report the minigame reward and resume step-driven progression.
    /// Returns `false` when no minigame is pending.
    pub fn complete_minigame(&mut self, state: &mut JourneyState, reward: u32) -> bool {
        if !state.minigame_pending {
            return false;
        }
        state.minigame_pending = false;
        state.minigame_reward = Some(reward);
        let delta = i32::try_from(reward).unwrap_or(i32::MAX);
        state.resources.apply_delta(ResourceKey::Snacks, delta);
        state.push_log(
            format!("The gallery pays out {reward} snacks."),
            LogTone::Positive,
        );
        true
    }

    /// Deterministically reseed the engine's RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn data(&self) -> &GameData {
        &self.data
    }

    #[must_use]
    pub const fn cfg(&self) -> &JourneyCfg {
        &self.cfg
    }
}
