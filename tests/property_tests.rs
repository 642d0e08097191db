//! Property-based tests - pragmatic approach testing the conversion's
//! structural guarantees across generated inputs.
//!
//! These complement the integration tests by checking the invariants the
//! builder promises (totality, idempotence, order independence) rather than
//! individual examples.

use proptest::prelude::*;
use props2json::{build, Options, Value};

prop_compose! {
    fn arb_key()(segments in prop::collection::vec("[a-z]{1,4}", 1..4)) -> String {
        segments.join(".")
    }
}

fn arb_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_key(), "[ -~]{0,12}"), 0..24)
}

fn all_leaves_are_strings(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().all(all_leaves_are_strings),
        Value::String(_) => true,
        _ => false,
    }
}

proptest! {
    // Totality: any pair sequence converts under any option combination
    #[test]
    fn prop_build_never_panics(
        pairs in arb_pairs(),
        raw_data in any::<bool>(),
        hierarchical in any::<bool>(),
    ) {
        let options = Options::new()
            .with_raw_data(raw_data)
            .with_hierarchical(hierarchical);
        let _ = build(pairs, &options);
    }

    #[test]
    fn prop_idempotent(
        pairs in arb_pairs(),
        raw_data in any::<bool>(),
        hierarchical in any::<bool>(),
    ) {
        let options = Options::new()
            .with_raw_data(raw_data)
            .with_hierarchical(hierarchical);
        prop_assert_eq!(build(pairs.clone(), &options), build(pairs, &options));
    }

    // Flat mode: one entry per distinct key, keyed by the verbatim key
    #[test]
    fn prop_flat_entry_per_distinct_key(pairs in arb_pairs()) {
        let distinct: std::collections::HashSet<_> =
            pairs.iter().map(|(k, _)| k.clone()).collect();
        let doc = build(pairs, &Options::new());
        prop_assert_eq!(doc.len(), distinct.len());
        for key in &distinct {
            prop_assert!(doc.get(key).is_some());
        }
    }

    #[test]
    fn prop_flat_last_value_wins(pairs in arb_pairs()) {
        let doc = build(pairs.clone(), &Options::new().with_raw_data(true));
        // the final pair is by definition the last occurrence of its key
        if let Some((key, value)) = pairs.last() {
            prop_assert_eq!(doc.get(key), Some(&Value::String(value.clone())));
        }
    }

    // Non-colliding flat keys: output content independent of input order
    #[test]
    fn prop_flat_order_independent(pairs in arb_pairs()) {
        let mut deduped: Vec<(String, String)> = Vec::new();
        for (k, v) in pairs {
            if !deduped.iter().any(|(dk, _)| dk == &k) {
                deduped.push((k, v));
            }
        }
        let mut reversed = deduped.clone();
        reversed.reverse();
        prop_assert_eq!(
            build(deduped, &Options::new()),
            build(reversed, &Options::new())
        );
    }

    // Raw mode: every leaf of the tree is a string, hierarchical or not
    #[test]
    fn prop_raw_leaves_are_strings(
        pairs in arb_pairs(),
        hierarchical in any::<bool>(),
    ) {
        let options = Options::new().with_raw_data(true).with_hierarchical(hierarchical);
        let doc = build(pairs, &options);
        prop_assert!(doc.values().all(all_leaves_are_strings));
    }

    // Hierarchical mode with a single pair: the chain depth equals the
    // number of key segments
    #[test]
    fn prop_hierarchical_chain_depth(key in arb_key(), value in "[a-z]{1,8}") {
        let doc = build(
            vec![(key.clone(), value.clone())],
            &Options::new().with_hierarchical(true).with_raw_data(true),
        );

        let mut node = Value::Object(doc);
        for segment in key.split('.') {
            let map = node.as_object().expect("intermediate node must be an object");
            prop_assert_eq!(map.len(), 1);
            node = map.get(segment).expect("segment must be present").clone();
        }
        prop_assert_eq!(node, Value::String(value));
    }
}
