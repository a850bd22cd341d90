//! Boundary between the journey engine and the midpoint minigame.

use crate::journey::JourneyState;

/// External minigame invoked once per journey at the midpoint.
///
/// The engine treats the call as atomic: progression stays suspended from the
/// midpoint trigger until the reward is reported back, and the reward is the
/// only thing that crosses the boundary. How it is earned (spawn mix, timing,
/// aim) is the bridge's private concern.
pub trait MinigameBridge {
    /// Run the minigame for the given journey and report the snack reward.
    ///
    /// # Errors
    ///
    /// May fail when the underlying minigame cannot run to completion; the
    /// session substitutes the configured fallback reward so the journey is
    /// never left stuck.
    fn trigger(&mut self, state: &JourneyState) -> anyhow::Result<u32>;
}

/// Bridge returning a constant reward. Useful for UI shells that resolve the
/// real minigame elsewhere, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRewardBridge {
    pub reward: u32,
}

impl FixedRewardBridge {
    #[must_use]
    pub const fn new(reward: u32) -> Self {
        Self { reward }
    }
}

impl MinigameBridge for FixedRewardBridge {
    fn trigger(&mut self, _state: &JourneyState) -> anyhow::Result<u32> {
        Ok(self.reward)
    }
}
