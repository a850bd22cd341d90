//! Mahomet Trail Game Engine
//!
//! Platform-agnostic core logic for the Mahomet Trail road-trip game: the
//! weighted event catalog, the bounded resource vector, critical-condition
//! evaluation, and the step-driven journey state machine with its midpoint
//! minigame bridge. Rendering, input, and the minigame's visuals live in the
//! embedding layer; this crate only computes state.

pub mod bridge;
pub mod constants;
pub mod critical;
pub mod data;
pub mod dynamic;
pub mod hunt;
pub mod journey;
pub mod resources;
pub mod selection;

// Re-export commonly used types
pub use bridge::{FixedRewardBridge, MinigameBridge};
pub use critical::check_critical_conditions;
pub use data::{
    CatalogError, Comparison, CriticalCondition, EffectList, Effects, EventDefinition, EventKind,
    GameConfig, GameData, VictoryConfig,
};
pub use dynamic::{DynamicHandler, EventOutcome, resolve_dynamic};
pub use hunt::{GalleryConfig, GalleryTarget, SnackGalleryBridge, run_snack_gallery};
pub use journey::{
    Ending, EngineError, GamePhase, JourneyCfg, JourneyConfigError, JourneyEngine, JourneySession,
    JourneyState, LogEntry, LogTone, StepOutcome,
};
pub use resources::{ResourceKey, Resources};
pub use selection::{EventPick, SelectionTrace, pick_event};

/// Trait for abstracting data loading operations.
/// Platform-specific implementations should provide this.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the game data from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the game data cannot be loaded.
    fn load_game_data(&self) -> Result<GameData, Self::Error>;
}

/// Loader serving the embedded default data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLoader;

impl DataLoader for StaticLoader {
    type Error = CatalogError;

    fn load_game_data(&self) -> Result<GameData, Self::Error> {
        GameData::load_from_static()
    }
}

/// Main entry point for constructing journeys from a data source.
pub struct GameEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> GameEngine<L>
where
    L: DataLoader,
{
    /// Create a new game engine with the provided data loader.
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Construct a seeded session with the default snack-gallery bridge.
    ///
    /// # Errors
    ///
    /// Returns an error when the data cannot be loaded or fails validation.
    pub fn create_session(&self, seed: u64) -> anyhow::Result<JourneySession>
    where
        L::Error: Into<anyhow::Error>,
    {
        let data = self.data_loader.load_game_data().map_err(Into::into)?;
        let bridge = Box::new(SnackGalleryBridge::with_seed(seed));
        let session = JourneySession::new(data, JourneyCfg::default(), seed, bridge)?;
        Ok(session)
    }

    /// Construct a seeded session with a caller-supplied minigame bridge.
    ///
    /// # Errors
    ///
    /// Returns an error when the data cannot be loaded or fails validation.
    pub fn create_session_with_bridge(
        &self,
        seed: u64,
        bridge: Box<dyn MinigameBridge>,
    ) -> anyhow::Result<JourneySession>
    where
        L::Error: Into<anyhow::Error>,
    {
        let data = self.data_loader.load_game_data().map_err(Into::into)?;
        let session = JourneySession::new(data, JourneyCfg::default(), seed, bridge)?;
        Ok(session)
    }
}
