//! Game-over condition evaluation.

use crate::data::{EventDefinition, GameData};
use crate::resources::Resources;

/// Return the first critical event whose condition holds, in
/// catalog-declaration order. First match wins; there is no severity ranking.
///
/// A critical event carrying no condition (possible only for hand-built
/// catalogs that skipped validation) is logged and treated as non-matching.
#[must_use]
pub fn check_critical_conditions<'a>(
    data: &'a GameData,
    resources: &Resources,
) -> Option<&'a EventDefinition> {
    data.critical_events().find(|event| {
        let Some(condition) = event.condition.as_ref() else {
            log::warn!(
                "critical event '{}' has no condition; treating as non-matching",
                event.id
            );
            return false;
        };
        condition.matches(resources)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Comparison, CriticalCondition, EventKind};
    use crate::resources::ResourceKey;

    fn fixture() -> GameData {
        GameData::load_from_static().unwrap()
    }

    #[test]
    fn healthy_resources_match_nothing() {
        let data = fixture();
        assert!(check_critical_conditions(&data, &Resources::default()).is_none());
    }

    #[test]
    fn empty_gas_matches_ran_out_gas() {
        let data = fixture();
        let resources = Resources {
            gas: 0,
            ..Resources::default()
        };
        let event = check_critical_conditions(&data, &resources).expect("gas condition holds");
        assert_eq!(event.id, "ran_out_gas");
        assert!(event.fatal);
    }

    #[test]
    fn first_match_in_catalog_order_wins() {
        let data = fixture();
        // Both gas and patience are depleted; gas is declared first.
        let resources = Resources {
            gas: 0,
            patience: 0,
            ..Resources::default()
        };
        let event = check_critical_conditions(&data, &resources).unwrap();
        assert_eq!(event.id, "ran_out_gas");
    }

    #[test]
    fn one_above_threshold_does_not_match() {
        let data = fixture();
        let resources = Resources {
            van_health: 1,
            ..Resources::default()
        };
        assert!(check_critical_conditions(&data, &resources).is_none());
    }

    #[test]
    fn conditionless_critical_is_skipped() {
        let mut data = fixture();
        data.events.insert(
            0,
            EventDefinition {
                id: String::from("broken_record"),
                kind: EventKind::Critical,
                title: String::from("Broken"),
                text: String::new(),
                effects: crate::data::Effects::default(),
                weight: 0,
                condition: None,
                fatal: true,
                dynamic: None,
            },
        );
        let resources = Resources {
            patience: 0,
            ..Resources::default()
        };
        // The malformed entry is skipped and the later valid one still fires.
        let event = check_critical_conditions(&data, &resources).unwrap();
        assert_eq!(event.id, "lost_patience");
    }

    #[test]
    fn operators_cover_all_comparisons() {
        let cases = [
            (Comparison::Le, 0, 0, true),
            (Comparison::Lt, 0, 0, false),
            (Comparison::Ge, 5, 5, true),
            (Comparison::Gt, 5, 5, false),
            (Comparison::Eq, 7, 7, true),
        ];
        for (op, lhs, rhs, expected) in cases {
            assert_eq!(op.evaluate(lhs, rhs), expected, "{lhs} {} {rhs}", op.as_str());
        }
    }

    #[test]
    fn condition_matches_reads_named_resource() {
        let condition = CriticalCondition {
            resource: ResourceKey::Snacks,
            op: Comparison::Le,
            threshold: 10,
        };
        let mut resources = Resources::default();
        assert!(!condition.matches(&resources));
        resources.apply_delta(ResourceKey::Snacks, -95);
        assert!(condition.matches(&resources));
    }
}
