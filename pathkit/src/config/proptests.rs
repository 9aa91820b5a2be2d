//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::project::Marker;
use proptest::prelude::*;

fn marker_strategy() -> impl Strategy<Value = Marker> {
    ("[A-Za-z_][A-Za-z0-9_.-]{0,12}", 0u8..3).prop_map(|(name, kind)| match kind {
        0 => Marker::directory(name),
        1 => Marker::file(name),
        _ => Marker::any(name),
    })
}

fn marker_list_strategy() -> impl Strategy<Value = Vec<Marker>> {
    prop::collection::vec(marker_strategy(), 1..6).prop_map(|markers| {
        let mut unique = Vec::new();
        ConfigMerger::append_markers(&mut unique, markers);
        unique
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(marker_list_strategy()),
        prop::option::of(marker_list_strategy()),
    )
        .prop_map(|(markers, extra_markers)| Config {
            markers,
            extra_markers,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence markers win when present
    #[test]
    fn merge_higher_precedence_markers_win(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        if high.markers.is_some() {
            prop_assert_eq!(result.markers, high.markers);
        } else {
            prop_assert_eq!(result.markers, low.markers);
        }
    }

    // Empty config is identity element for merge
    #[test]
    fn merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Extra markers never lose a name and never hold duplicates
    #[test]
    fn extra_markers_union(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let merged: Vec<String> = result
            .extra_markers
            .unwrap_or_default()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        for marker in low.extra_markers.iter().chain(high.extra_markers.iter()).flatten() {
            prop_assert!(merged.iter().any(|name| name == marker.name()));
        }

        let mut deduped = merged.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), merged.len());
    }

    // Merging valid configs yields a valid config
    #[test]
    fn merged_configs_stay_valid(low in config_strategy(), high in config_strategy()) {
        prop_assume!(ConfigValidator::validate(&low).is_ok());
        prop_assume!(ConfigValidator::validate(&high).is_ok());

        let mut result = low;
        ConfigMerger::merge_into(&mut result, &high);
        prop_assert!(ConfigValidator::validate(&result).is_ok());
    }
}
