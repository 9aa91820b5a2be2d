//! Property-based tests for path handling.
//!
//! The per-module property tests run a small number of cases on every
//! build; this suite runs many more and exercises the modules together.

use super::normalize::{join, normalize};
use super::relationship::{is_subpath, PathRelationship};
use super::relative::relative;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..12)).prop_map(
        |(absolute, parts)| {
            let body = parts.join("/");
            if absolute {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 0..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in messy_path_strategy()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    // Normalization never changes whether a path is absolute
    #[test]
    fn normalization_preserves_absoluteness(path in messy_path_strategy()) {
        let normalized = normalize(&path);
        prop_assert_eq!(normalized.starts_with('/'), path.starts_with('/'));
    }

    // Absolute normalized paths never contain ".."
    #[test]
    fn absolute_normalized_has_no_parent_refs(path in messy_path_strategy()) {
        let normalized = normalize(&format!("/{path}"));
        prop_assert!(normalized.split('/').all(|s| s != ".."));
    }

    // Joining the relative path onto its origin reaches the destination
    #[test]
    fn relative_round_trip(
        from in messy_path_strategy(),
        to in messy_path_strategy(),
    ) {
        let from = format!("/{from}");
        let to = format!("/{to}");
        let rel = relative(&from, &to).unwrap();
        prop_assert_eq!(join(&from, &rel), normalize(&to));
    }

    // The relative path between a path and its subpath never climbs
    #[test]
    fn relative_to_subpath_has_no_parent_refs(
        base in absolute_path_strategy(),
        tail in absolute_path_strategy(),
    ) {
        let child = format!("{base}{tail}");
        prop_assume!(is_subpath(&base, &child));
        let rel = relative(&base, &child).unwrap();
        prop_assert!(!rel.split('/').any(|s| s == ".."));
    }

    // Relationship is antisymmetric
    #[test]
    fn relationship_antisymmetric(
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let forward = PathRelationship::between(&a, &b);
        let backward = PathRelationship::between(&b, &a);
        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, expected);
    }

    // Containment is transitive
    #[test]
    fn subpath_transitive(
        a in absolute_path_strategy(),
        mid in prop::collection::vec("[a-z]{1,4}", 0..3),
        tail in prop::collection::vec("[a-z]{1,4}", 0..3),
    ) {
        let b = join(&a, &mid.join("/"));
        let c = join(&b, &tail.join("/"));
        prop_assert!(is_subpath(&a, &b));
        prop_assert!(is_subpath(&b, &c));
        prop_assert!(is_subpath(&a, &c));
    }
}
