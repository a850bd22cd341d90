//! Journey domain primitives shared by the engine and session layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{PROGRESS_MAX_MILES, PROGRESS_MIN_MILES};
use crate::data::EventDefinition;
use crate::dynamic::EventOutcome;
use crate::resources::Resources;

pub mod engine;
pub mod session;
pub use engine::{EngineError, JourneyEngine};
pub use session::JourneySession;

/// Where a journey sits in its lifecycle. `Victory` and `Defeated` are
/// terminal; a terminal state is never mutated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Victory,
    Defeated,
}

impl GamePhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeated)
    }
}

/// How a finished journey ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Victory,
    Defeat { event_id: String },
}

/// Presentation tone attached to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogTone {
    #[default]
    Neutral,
    Positive,
    Negative,
    Important,
}

/// One entry in the journey log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub tone: LogTone,
}

impl LogEntry {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: LogTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JourneyCfg {
    /// Minimum miles credited per step.
    pub progress_min_miles: f32,
    /// Maximum miles credited per step.
    pub progress_max_miles: f32,
    /// Snack reward substituted when the minigame bridge fails.
    pub bridge_fallback_reward: u32,
}

impl Default for JourneyCfg {
    fn default() -> Self {
        Self {
            progress_min_miles: PROGRESS_MIN_MILES,
            progress_max_miles: PROGRESS_MAX_MILES,
            bridge_fallback_reward: 0,
        }
    }
}

impl JourneyCfg {
    /// Check the config invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), JourneyConfigError> {
        if self.progress_min_miles <= 0.0 {
            return Err(JourneyConfigError::NonPositiveProgress {
                miles: self.progress_min_miles,
            });
        }
        if self.progress_max_miles < self.progress_min_miles {
            return Err(JourneyConfigError::InvertedProgressRange {
                min: self.progress_min_miles,
                max: self.progress_max_miles,
            });
        }
        Ok(())
    }
}

/// Journey configuration failures, rejected before a journey starts.
#[derive(Debug, Error, PartialEq)]
pub enum JourneyConfigError {
    #[error("per-step progress must be positive, got {miles}")]
    NonPositiveProgress { miles: f32 },
    #[error("progress range is inverted: min {min} > max {max}")]
    InvertedProgressRange { min: f32, max: f32 },
}

/// What a single `step()` produced, for the UI to render.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A critical condition held before any progression; the journey is over.
    CriticalEventFired { event: EventDefinition },
    /// A weighted event was drawn, resolved, and applied.
    EventApplied {
        event: EventDefinition,
        outcome: EventOutcome,
        resources: Resources,
    },
    /// The midpoint was crossed; the minigame is pending and no event was
    /// drawn this step.
    MidpointReached,
    /// Destination reached.
    Victory { resources: Resources },
    /// Nothing happened (terminal journey, unstarted journey, or a step
    /// attempted while the minigame is pending).
    Unchanged,
}

/// Mutable state of one play-through. Owned by the engine's caller and
/// mutated exclusively through [`JourneyEngine`] methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyState {
    pub resources: Resources,
    pub distance_traveled: f32,
    pub total_distance: f32,
    pub phase: GamePhase,
    /// Set when the midpoint minigame has fired; it fires at most once.
    pub midpoint_triggered: bool,
    /// Set between the midpoint trigger and the bridge's completion. Steps
    /// are no-ops while this holds.
    pub minigame_pending: bool,
    /// Reward the bridge reported, once resolved.
    pub minigame_reward: Option<u32>,
    pub ending: Option<Ending>,
    pub log: Vec<LogEntry>,
    /// Count of effective (non-no-op) steps taken.
    pub steps: u32,
}

impl JourneyState {
    /// Fresh state at the departure point.
    #[must_use]
    pub fn new(starting_resources: Resources, total_distance: f32) -> Self {
        let mut resources = starting_resources;
        resources.clamp();
        Self {
            resources,
            distance_traveled: 0.0,
            total_distance,
            phase: GamePhase::NotStarted,
            midpoint_triggered: false,
            minigame_pending: false,
            minigame_reward: None,
            ending: None,
            log: Vec::new(),
            steps: 0,
        }
    }

    /// Distance at which the minigame fires.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        self.total_distance / 2.0
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn push_log(&mut self, text: impl Into<String>, tone: LogTone) {
        self.log.push(LogEntry::new(text, tone));
    }
}

impl Default for JourneyState {
    fn default() -> Self {
        Self::new(Resources::default(), crate::constants::DEFAULT_TOTAL_DISTANCE_MILES)
    }
}
