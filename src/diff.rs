//! The recursive differ and its array-matching strategies.
//!
//! Dispatch at every node pair, in order:
//!
//! 1. A path whose final key segment is ignored produces nothing.
//! 2. Different discriminants produce one [`Edit::Changed`] at the node;
//!    a type change makes per-field comparison meaningless, so mismatched
//!    nodes (null against anything included) are never decomposed.
//! 3. Equal scalars produce nothing; unequal scalars one `Changed`
//!    (strings fold case first under `ignore_case`).
//! 4. Arrays go through index-wise or multiset matching depending on
//!    `ignore_order`.
//! 5. Objects walk the sorted union of both key sets minus the ignored
//!    keys; one-sided subtrees are flattened leaf by leaf.
//!
//! Unordered array matching is a two-phase greedy multiset match on
//! [`fingerprint`]s: equal-fingerprint elements pair off in encounter
//! order and emit nothing, then the leftovers of both sides are paired
//! positionally and recursed — so a near-match (one field changed inside
//! an element) still surfaces as fine-grained `Changed` edits — and any
//! excess beyond the shorter leftover list is flattened. The positional
//! pairing of leftovers is a deliberate heuristic, not an optimal
//! assignment; with several changed elements in one unordered array it
//! can pair unrelated elements.

use std::collections::{HashMap, VecDeque};

use crate::flatten::flatten;
use crate::normalize::fingerprint;
use crate::path::{final_key, join_index, join_key};
use crate::{DiffOptions, Edit, JsonMap, Value};

/// Compares two trees and returns the ordered edit list.
pub(crate) fn diff_values(left: &Value, right: &Value, options: &DiffOptions) -> Vec<Edit> {
    let mut edits = Vec::new();
    compare(left, right, "", options, &mut edits);
    edits
}

fn compare(a: &Value, b: &Value, path: &str, options: &DiffOptions, out: &mut Vec<Edit>) {
    if final_key(path).is_some_and(|key| options.ignores_key(key)) {
        return;
    }
    match (a, b) {
        (Value::Null, Value::Null) => {}
        (Value::Bool(x), Value::Bool(y)) => {
            if x != y {
                push_changed(a, b, path, out);
            }
        }
        (Value::Number(x), Value::Number(y)) => {
            if x != y {
                push_changed(a, b, path, out);
            }
        }
        (Value::String(x), Value::String(y)) => {
            let equal = if options.ignore_case {
                x.to_lowercase() == y.to_lowercase()
            } else {
                x == y
            };
            if !equal {
                push_changed(a, b, path, out);
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            if options.ignore_order {
                compare_arrays_unordered(x, y, path, options, out);
            } else {
                compare_arrays_ordered(x, y, path, options, out);
            }
        }
        (Value::Object(x), Value::Object(y)) => compare_objects(x, y, path, options, out),
        // Discriminant mismatch: one edit at the node, no decomposition
        _ => push_changed(a, b, path, out),
    }
}

fn compare_objects(a: &JsonMap, b: &JsonMap, path: &str, options: &DiffOptions, out: &mut Vec<Edit>) {
    let mut keys: Vec<&String> = a
        .keys()
        .chain(b.keys())
        .filter(|key| !options.ignores_key(key.as_str()))
        .collect();
    keys.sort();
    keys.dedup();

    for key in keys {
        let child_path = join_key(path, key);
        match (a.get(key), b.get(key)) {
            (Some(left), Some(right)) => compare(left, right, &child_path, options, out),
            (Some(left), None) => push_removed(left, &child_path, options, out),
            (None, Some(right)) => push_added(right, &child_path, options, out),
            (None, None) => {}
        }
    }
}

fn compare_arrays_ordered(
    a: &[Value],
    b: &[Value],
    path: &str,
    options: &DiffOptions,
    out: &mut Vec<Edit>,
) {
    for i in 0..a.len().max(b.len()) {
        let child_path = join_index(path, i);
        match (a.get(i), b.get(i)) {
            (Some(left), Some(right)) => compare(left, right, &child_path, options, out),
            (Some(left), None) => push_removed(left, &child_path, options, out),
            (None, Some(right)) => push_added(right, &child_path, options, out),
            (None, None) => {}
        }
    }
}

fn compare_arrays_unordered(
    a: &[Value],
    b: &[Value],
    path: &str,
    options: &DiffOptions,
    out: &mut Vec<Edit>,
) {
    // Phase 1: pair equal-fingerprint elements, first-come first-served
    let mut slots: HashMap<String, VecDeque<usize>> = HashMap::new();
    for (j, element) in b.iter().enumerate() {
        slots
            .entry(fingerprint(element, options))
            .or_default()
            .push_back(j);
    }

    let mut used_b = vec![false; b.len()];
    let mut unmatched_a = Vec::new();
    for (i, element) in a.iter().enumerate() {
        let key = fingerprint(element, options);
        match slots.get_mut(&key).and_then(VecDeque::pop_front) {
            Some(j) => used_b[j] = true,
            None => unmatched_a.push(i),
        }
    }
    let unmatched_b: Vec<usize> = (0..b.len()).filter(|&j| !used_b[j]).collect();

    // Phase 2: pair leftovers positionally and recurse; flatten the excess
    let paired = unmatched_a.len().min(unmatched_b.len());
    for x in 0..paired {
        let child_path = join_index(path, unmatched_a[x]);
        compare(&a[unmatched_a[x]], &b[unmatched_b[x]], &child_path, options, out);
    }
    for &i in &unmatched_a[paired..] {
        push_removed(&a[i], &join_index(path, i), options, out);
    }
    for &j in &unmatched_b[paired..] {
        push_added(&b[j], &join_index(path, j), options, out);
    }
}

fn push_changed(a: &Value, b: &Value, path: &str, out: &mut Vec<Edit>) {
    out.push(Edit::Changed {
        path: path.to_string(),
        left: a.clone(),
        right: b.clone(),
    });
}

fn push_removed(value: &Value, path: &str, options: &DiffOptions, out: &mut Vec<Edit>) {
    for leaf in flatten(value, path, options) {
        out.push(Edit::Removed {
            path: leaf.path,
            value: leaf.value,
        });
    }
}

fn push_added(value: &Value, path: &str, options: &DiffOptions, out: &mut Vec<Edit>) {
    for leaf in flatten(value, path, options) {
        out.push(Edit::Added {
            path: leaf.path,
            value: leaf.value,
        });
    }
}
