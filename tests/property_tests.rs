//! Property-based tests for the engine's documented invariants.
//!
//! These complement the scenario suite by checking the structural
//! guarantees across generated documents: identity, swap symmetry,
//! member-order insensitivity, and the behavior of each ignore option.

use json_deep_diff::{diff, diff_with_options, DiffOptions, Edit, JsonMap, Value};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::from(i64::from(n))),
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|pairs| {
                Value::Object(pairs.into_iter().collect::<JsonMap>())
            }),
        ]
    })
}

/// Recursively reverses object member order without touching arrays.
fn reverse_members(value: &Value) -> Value {
    match value {
        Value::Array(elements) => Value::Array(elements.iter().map(reverse_members).collect()),
        Value::Object(members) => {
            let mut pairs: Vec<(String, Value)> = members
                .iter()
                .map(|(k, v)| (k.clone(), reverse_members(v)))
                .collect();
            pairs.reverse();
            Value::Object(pairs.into_iter().collect())
        }
        other => other.clone(),
    }
}

/// Recursively lowercases every string scalar (keys untouched).
fn lowercase_strings(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        Value::Array(elements) => {
            Value::Array(elements.iter().map(lowercase_strings).collect())
        }
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), lowercase_strings(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn final_segment(path: &str) -> Option<&str> {
    path.rsplit('.')
        .next()
        .map(|seg| seg.split('[').next().unwrap_or(seg))
}

proptest! {
    #[test]
    fn prop_identity_is_silent(doc in arb_value()) {
        prop_assert!(diff(&doc, &doc).is_empty());

        let relaxed = DiffOptions::new()
            .with_ignore_order(true)
            .with_ignore_case(true);
        prop_assert!(diff_with_options(&doc, &doc, &relaxed).is_empty());
    }

    #[test]
    fn prop_output_is_deterministic(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(diff(&a, &b), diff(&a, &b));
    }

    #[test]
    fn prop_swap_reverses_edit_direction(a in arb_value(), b in arb_value()) {
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);
        prop_assert_eq!(forward.len(), backward.len());

        let mut forward_paths: Vec<&str> = forward.iter().map(Edit::path).collect();
        let mut backward_paths: Vec<&str> = backward.iter().map(Edit::path).collect();
        forward_paths.sort_unstable();
        backward_paths.sort_unstable();
        prop_assert_eq!(forward_paths, backward_paths);

        for edit in &forward {
            let mirrored = match edit {
                Edit::Added { path, value } => Edit::Removed {
                    path: path.clone(),
                    value: value.clone(),
                },
                Edit::Removed { path, value } => Edit::Added {
                    path: path.clone(),
                    value: value.clone(),
                },
                Edit::Changed { path, left, right } => Edit::Changed {
                    path: path.clone(),
                    left: right.clone(),
                    right: left.clone(),
                },
            };
            prop_assert!(backward.contains(&mirrored));
        }
    }

    #[test]
    fn prop_member_order_is_invisible(a in arb_value(), b in arb_value()) {
        let reordered_a = reverse_members(&a);
        prop_assert!(diff(&a, &reordered_a).is_empty());
        prop_assert_eq!(diff(&a, &b), diff(&reordered_a, &b));
    }

    #[test]
    fn prop_permutations_vanish_under_ignore_order(
        (original, shuffled) in prop::collection::vec(arb_value(), 0..6)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let options = DiffOptions::new().with_ignore_order(true);
        let edits = diff_with_options(
            &Value::Array(original),
            &Value::Array(shuffled),
            &options,
        );
        prop_assert!(edits.is_empty(), "permutation produced {edits:?}");
    }

    #[test]
    fn prop_case_folding_vanishes_under_ignore_case(doc in arb_value()) {
        let options = DiffOptions::new().with_ignore_case(true);
        let folded = lowercase_strings(&doc);
        let edits = diff_with_options(&doc, &folded, &options);
        prop_assert!(edits.is_empty(), "case fold produced {edits:?}");
    }

    #[test]
    fn prop_ignored_keys_never_terminate_paths(
        a in arb_value(),
        b in arb_value(),
        key in "[a-z]{1,4}",
    ) {
        let options = DiffOptions::new().with_ignore_keys([key.clone()]);
        for edit in diff_with_options(&a, &b, &options) {
            prop_assert_ne!(final_segment(edit.path()), Some(key.as_str()));
        }
    }
}
