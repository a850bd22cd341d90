//! Bounded resource vector for a single journey.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{RESOURCE_MAX, RESOURCE_MIN};

/// The four resources tracked over a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKey {
    Gas,
    Snacks,
    Patience,
    VanHealth,
}

impl ResourceKey {
    /// All keys in canonical declaration order.
    pub const ALL: [Self; 4] = [Self::Gas, Self::Snacks, Self::Patience, Self::VanHealth];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Snacks => "snacks",
            Self::Patience => "patience",
            Self::VanHealth => "van_health",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gas" => Ok(Self::Gas),
            "snacks" => Ok(Self::Snacks),
            "patience" => Ok(Self::Patience),
            "van_health" => Ok(Self::VanHealth),
            _ => Err(()),
        }
    }
}

/// Resource values, each clamped to `[RESOURCE_MIN, RESOURCE_MAX]`.
///
/// Mutation goes through [`Resources::apply_delta`], so a value outside the
/// clamp range is never observable. Typed keys make the legacy
/// "unknown resource key" case unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub gas: i32,
    pub snacks: i32,
    pub patience: i32,
    pub van_health: i32,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            gas: RESOURCE_MAX,
            snacks: RESOURCE_MAX,
            patience: RESOURCE_MAX,
            van_health: RESOURCE_MAX,
        }
    }
}

impl Resources {
    /// Read a single resource value.
    #[must_use]
    pub const fn get(&self, key: ResourceKey) -> i32 {
        match key {
            ResourceKey::Gas => self.gas,
            ResourceKey::Snacks => self.snacks,
            ResourceKey::Patience => self.patience,
            ResourceKey::VanHealth => self.van_health,
        }
    }

    /// Add `amount` to the keyed resource, then clamp into range.
    pub const fn apply_delta(&mut self, key: ResourceKey, amount: i32) {
        let slot = match key {
            ResourceKey::Gas => &mut self.gas,
            ResourceKey::Snacks => &mut self.snacks,
            ResourceKey::Patience => &mut self.patience,
            ResourceKey::VanHealth => &mut self.van_health,
        };
        *slot = (*slot).saturating_add(amount);
        *slot = clamp_resource(*slot);
    }

    /// Re-clamp every field. Used after deserializing caller-supplied data.
    pub const fn clamp(&mut self) {
        self.gas = clamp_resource(self.gas);
        self.snacks = clamp_resource(self.snacks);
        self.patience = clamp_resource(self.patience);
        self.van_health = clamp_resource(self.van_health);
    }

    /// Immutable copy for display and logging.
    #[must_use]
    pub const fn snapshot(&self) -> Self {
        *self
    }

    /// True when every value lies inside the clamp range.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.gas >= RESOURCE_MIN
            && self.gas <= RESOURCE_MAX
            && self.snacks >= RESOURCE_MIN
            && self.snacks <= RESOURCE_MAX
            && self.patience >= RESOURCE_MIN
            && self.patience <= RESOURCE_MAX
            && self.van_health >= RESOURCE_MIN
            && self.van_health <= RESOURCE_MAX
    }
}

const fn clamp_resource(value: i32) -> i32 {
    if value < RESOURCE_MIN {
        RESOURCE_MIN
    } else if value > RESOURCE_MAX {
        RESOURCE_MAX
    } else {
        value
    }
}
