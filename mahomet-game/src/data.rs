//! Event catalog schema, validation, and the embedded default data set.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::constants::EFFECT_MAGNITUDE_LIMIT;
use crate::dynamic::DynamicHandler;
use crate::resources::{ResourceKey, Resources};

const DEFAULT_GAME_DATA: &str = include_str!("../assets/gamedata.json");

/// Inline list of `(resource, delta)` pairs in canonical key order.
pub type EffectList = SmallVec<[(ResourceKey, i32); 4]>;

/// Category an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Positive,
    Neutral,
    MinorNegative,
    MajorNegative,
    Critical,
}

impl EventKind {
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::MinorNegative | Self::MajorNegative)
    }
}

/// Signed resource deltas attached to an event.
///
/// Unknown resource names are a parse error, so a misspelled key in catalog
/// data surfaces at load time instead of being silently dropped mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Effects {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub gas: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub snacks: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub patience: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub van_health: i32,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl Effects {
    /// Non-zero deltas in canonical key order.
    #[must_use]
    pub fn entries(&self) -> EffectList {
        let mut list = EffectList::new();
        for key in ResourceKey::ALL {
            let amount = self.get(key);
            if amount != 0 {
                list.push((key, amount));
            }
        }
        list
    }

    #[must_use]
    pub const fn get(&self, key: ResourceKey) -> i32 {
        match key {
            ResourceKey::Gas => self.gas,
            ResourceKey::Snacks => self.snacks,
            ResourceKey::Patience => self.patience,
            ResourceKey::VanHealth => self.van_health,
        }
    }

    pub const fn set(&mut self, key: ResourceKey, amount: i32) {
        match key {
            ResourceKey::Gas => self.gas = amount,
            ResourceKey::Snacks => self.snacks = amount,
            ResourceKey::Patience => self.patience = amount,
            ResourceKey::VanHealth => self.van_health = amount,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Apply every delta to `resources` through the clamping mutator.
    pub fn apply_to(&self, resources: &mut Resources) {
        for (key, amount) in self.entries() {
            resources.apply_delta(key, amount);
        }
    }
}

/// Comparison operator in a critical condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Le,
    Lt,
    Ge,
    Gt,
    Eq,
}

impl Comparison {
    #[must_use]
    pub const fn evaluate(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Self::Le => lhs <= rhs,
            Self::Lt => lhs < rhs,
            Self::Ge => lhs >= rhs,
            Self::Gt => lhs > rhs,
            Self::Eq => lhs == rhs,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Le => "<=",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Gt => ">",
            Self::Eq => "==",
        }
    }
}

/// Structured game-over predicate: `resource <op> threshold`.
///
/// Replaces the legacy string-substitution-plus-eval scheme; evaluation is a
/// direct lookup and comparison, no parsing or dynamic execution involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalCondition {
    pub resource: ResourceKey,
    pub op: Comparison,
    pub threshold: i32,
}

impl CriticalCondition {
    #[must_use]
    pub const fn matches(&self, resources: &Resources) -> bool {
        self.op
            .evaluate(resources.get(self.resource), self.threshold)
    }
}

impl fmt::Display for CriticalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.resource.as_str(),
            self.op.as_str(),
            self.threshold
        )
    }
}

/// Immutable catalog record for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub id: String,
    pub kind: EventKind,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub effects: Effects,
    /// Selection weight; required (> 0) for every non-critical event.
    #[serde(default)]
    pub weight: u32,
    /// Game-over predicate; required for critical events, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<CriticalCondition>,
    #[serde(default)]
    pub fatal: bool,
    /// Handler computing this event's outcome at draw time. `None` = static.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicHandler>,
}

impl EventDefinition {
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        self.kind.is_critical()
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic.is_some()
    }
}

/// Journey-level configuration from the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub start_location: String,
    pub end_location: String,
    pub total_distance: f32,
}

/// Victory screen copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryConfig {
    pub title: String,
    pub messages: Vec<String>,
}

/// Root of the data file: config, starting resources, events, victory copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub game: GameConfig,
    pub starting_resources: Resources,
    pub events: Vec<EventDefinition>,
    pub victory: VictoryConfig,
}

impl GameData {
    /// Parse and validate a data file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the JSON is malformed or the catalog
    /// fails a load-time invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Load the embedded default data set.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the embedded asset fails validation.
    pub fn load_from_static() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_GAME_DATA)
    }

    /// Check every catalog invariant. Runs before any journey starts.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.game.total_distance <= 0.0 {
            return Err(CatalogError::InvalidDistance {
                distance: self.game.total_distance,
            });
        }
        if !self.starting_resources.in_bounds() {
            return Err(CatalogError::StartingResourcesOutOfRange);
        }

        let mut seen = HashSet::new();
        let mut eligible = 0_usize;
        for event in &self.events {
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: event.id.clone(),
                });
            }
            for (key, amount) in event.effects.entries() {
                if amount.abs() > EFFECT_MAGNITUDE_LIMIT {
                    return Err(CatalogError::EffectOutOfRange {
                        id: event.id.clone(),
                        resource: key,
                        amount,
                    });
                }
            }
            if event.is_critical() {
                if event.condition.is_none() {
                    return Err(CatalogError::MissingCondition {
                        id: event.id.clone(),
                    });
                }
                if !event.fatal {
                    return Err(CatalogError::NonFatalCritical {
                        id: event.id.clone(),
                    });
                }
            } else {
                if event.weight == 0 {
                    return Err(CatalogError::MissingWeight {
                        id: event.id.clone(),
                    });
                }
                if event.condition.is_some() {
                    return Err(CatalogError::UnexpectedCondition {
                        id: event.id.clone(),
                    });
                }
                eligible += 1;
            }
        }

        if eligible == 0 {
            return Err(CatalogError::NoEligibleEvents);
        }
        Ok(())
    }

    /// Events eligible for the weighted draw, in catalog order.
    pub fn eligible_events(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.iter().filter(|event| !event.is_critical())
    }

    /// Critical events in catalog-declaration order.
    pub fn critical_events(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.iter().filter(|event| event.is_critical())
    }
}

/// Load-time catalog failures. These abort construction; none of them can
/// surface once a journey is underway.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("total_distance must be positive, got {distance}")]
    InvalidDistance { distance: f32 },
    #[error("starting resources fall outside the clamp range")]
    StartingResourcesOutOfRange,
    #[error("duplicate event id '{id}'")]
    DuplicateId { id: String },
    #[error("non-critical event '{id}' is missing a positive weight")]
    MissingWeight { id: String },
    #[error("critical event '{id}' is missing its condition")]
    MissingCondition { id: String },
    #[error("non-critical event '{id}' declares a critical condition")]
    UnexpectedCondition { id: String },
    #[error("critical event '{id}' is not marked fatal")]
    NonFatalCritical { id: String },
    #[error("event '{id}' effect on {resource} is out of range ({amount})")]
    EffectOutOfRange {
        id: String,
        resource: ResourceKey,
        amount: i32,
    },
    #[error("catalog has no weighted events eligible for selection")]
    NoEligibleEvents,
}
