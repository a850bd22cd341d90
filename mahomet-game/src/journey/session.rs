//! High-level session binding an engine, a journey state, and a minigame
//! bridge.

use crate::bridge::MinigameBridge;
use crate::data::GameData;
use crate::hunt::SnackGalleryBridge;
use crate::journey::{Ending, EngineError, JourneyCfg, JourneyEngine, JourneyState, StepOutcome};

/// One running play-through. The session resolves the midpoint bridge inline,
/// so callers that don't embed a real-time minigame can just call [`step`]
/// until the journey ends.
///
/// [`step`]: JourneySession::step
pub struct JourneySession {
    engine: JourneyEngine,
    state: JourneyState,
    bridge: Box<dyn MinigameBridge>,
}

impl JourneySession {
    /// Construct a session over validated data with an explicit bridge.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the catalog or config is invalid.
    pub fn new(
        data: GameData,
        cfg: JourneyCfg,
        seed: u64,
        bridge: Box<dyn MinigameBridge>,
    ) -> Result<Self, EngineError> {
        let engine = JourneyEngine::new(data, cfg, seed)?;
        let state = engine.start();
        Ok(Self {
            engine,
            state,
            bridge,
        })
    }

    /// Session over the embedded default data with the headless snack
    /// gallery as its bridge.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the embedded data fails validation.
    pub fn with_default_data(seed: u64) -> Result<Self, EngineError> {
        let data = GameData::load_from_static()?;
        let bridge = Box::new(SnackGalleryBridge::with_seed(seed));
        Self::new(data, JourneyCfg::default(), seed, bridge)
    }

    /// Advance one continue action, resolving the midpoint bridge inline.
    /// A failing bridge is substituted with the configured fallback reward so
    /// the journey never stalls.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.engine.step(&mut self.state);
        if matches!(outcome, StepOutcome::MidpointReached) {
            let reward = match self.bridge.trigger(&self.state) {
                Ok(reward) => reward,
                Err(err) => {
                    log::warn!("minigame bridge failed: {err}; using fallback reward");
                    self.engine.cfg().bridge_fallback_reward
                }
            };
            self.engine.complete_minigame(&mut self.state, reward);
        }
        outcome
    }

    /// Step until the journey reaches a terminal state, bounded by
    /// `max_steps`. Returns the ending when one was reached.
    pub fn run_to_end(&mut self, max_steps: u32) -> Option<Ending> {
        for _ in 0..max_steps {
            if self.state.is_over() {
                break;
            }
            let _ = self.step();
        }
        self.state.ending.clone()
    }

    /// Abandon the current journey and start over with fresh state. In-flight
    /// minigame progress is discarded with it.
    pub fn reset(&mut self) {
        self.state = self.engine.start();
    }

    /// Deterministically reseed the engine and restart the journey.
    pub fn reseed(&mut self, seed: u64) {
        self.engine.reseed(seed);
        self.reset();
    }

    #[must_use]
    pub const fn state(&self) -> &JourneyState {
        &self.state
    }

    #[must_use]
    pub const fn engine(&self) -> &JourneyEngine {
        &self.engine
    }

    /// Apply a closure to the mutable journey state.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut JourneyState) -> R) -> R {
        f(&mut self.state)
    }

    /// Consume the session, returning the final journey state.
    #[must_use]
    pub fn into_state(self) -> JourneyState {
        self.state
    }
}
