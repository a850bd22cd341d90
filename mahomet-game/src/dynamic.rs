//! Draw-time outcome resolution for dynamic events.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CORN_PENALTY_MAX, CORN_PENALTY_MIN, CORN_TIER_LOST, CORN_TIER_MILD, CORN_TIER_ROUGH,
    CORN_VAN_DAMAGE_DIVISOR,
};
use crate::data::{Effects, EventDefinition};
use crate::journey::JourneyState;

/// Identifies the handler that computes a dynamic event's outcome.
///
/// Serde-typed rather than a free-form id, so a catalog referencing a handler
/// that does not exist fails at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicHandler {
    FordCornField,
}

/// Transient result of resolving one event draw. Overrides the static
/// title/text/effects for that draw only; the catalog entry is not touched.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    pub title: String,
    pub text: String,
    pub effects: Effects,
}

impl EventOutcome {
    /// Outcome of a static event: the catalog copy verbatim.
    #[must_use]
    pub fn from_static(event: &EventDefinition) -> Self {
        Self {
            title: event.title.clone(),
            text: event.text.clone(),
            effects: event.effects,
        }
    }
}

/// Resolve a dynamic event against the current journey state.
pub fn resolve_dynamic<R: Rng>(
    handler: DynamicHandler,
    event: &EventDefinition,
    state: &JourneyState,
    rng: &mut R,
) -> EventOutcome {
    match handler {
        DynamicHandler::FordCornField => resolve_ford_corn_field(event, state, rng),
    }
}

/// The shortcut through the corn. Patience penalty is uniform in
/// `[CORN_PENALTY_MIN, CORN_PENALTY_MAX]`; the van takes a tenth of it,
/// floored. Narration escalates with the roll.
fn resolve_ford_corn_field<R: Rng>(
    event: &EventDefinition,
    _state: &JourneyState,
    rng: &mut R,
) -> EventOutcome {
    let patience_loss = rng.gen_range(CORN_PENALTY_MIN..=CORN_PENALTY_MAX);

    let coda = if patience_loss < CORN_TIER_MILD {
        " Surprisingly, it wasn't that bad."
    } else if patience_loss < CORN_TIER_ROUGH {
        " Corn stalks slap against the windows. This was a mistake."
    } else if patience_loss < CORN_TIER_LOST {
        " You're completely lost in the corn. Your family is screaming."
    } else {
        " CORN EVERYWHERE. You've made a terrible, terrible mistake."
    };

    EventOutcome {
        title: event.title.clone(),
        text: format!("{}{coda}", event.text),
        effects: Effects {
            patience: -patience_loss,
            van_health: -(patience_loss / CORN_VAN_DAMAGE_DIVISOR),
            ..Effects::default()
        },
    }
}
