//! Leaf expansion for one-sided subtrees.
//!
//! When a whole subtree exists on only one side of a comparison, the engine
//! reports it leaf by leaf rather than as a single "object added" edit, so
//! consumers always see differences at terminal-value granularity.
//! [`flatten`] performs that expansion: it walks a value and returns every
//! leaf with its full path.
//!
//! A leaf is a scalar, a null, or an empty container; an empty array or
//! object is reported as itself at its own path rather than disappearing.
//! Ignored keys are skipped, and an object whose every key is ignored
//! degrades to the empty-object leaf at its base path.

use crate::path::{join_index, join_key};
use crate::{DiffOptions, JsonMap, Value};

/// One terminal value of a flattened subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    /// Full path of the leaf relative to the document root.
    pub path: String,
    /// The leaf value (owned; an empty container for the fallback cases).
    pub value: Value,
}

/// Expands `value` into its leaves, each addressed from `base_path`.
///
/// Object keys are visited in ascending lexicographic order, array elements
/// in index order, so the result order matches the differ's emission order.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{flatten, value, DiffOptions};
///
/// let subtree = value!({"b": {"x": 1, "y": [true]}, "a": 2});
/// let leaves = flatten(&subtree, "root", &DiffOptions::new());
/// let paths: Vec<&str> = leaves.iter().map(|l| l.path.as_str()).collect();
/// assert_eq!(paths, ["root.a", "root.b.x", "root.b.y[0]"]);
/// ```
#[must_use]
pub fn flatten(value: &Value, base_path: &str, options: &DiffOptions) -> Vec<Leaf> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            vec![Leaf {
                path: base_path.to_string(),
                value: value.clone(),
            }]
        }
        Value::Array(elements) => {
            let mut leaves = Vec::new();
            for (i, element) in elements.iter().enumerate() {
                leaves.extend(flatten(element, &join_index(base_path, i), options));
            }
            if leaves.is_empty() {
                leaves.push(Leaf {
                    path: base_path.to_string(),
                    value: Value::Array(Vec::new()),
                });
            }
            leaves
        }
        Value::Object(members) => {
            let mut entries: Vec<(&String, &Value)> = members
                .iter()
                .filter(|(key, _)| !options.ignores_key(key.as_str()))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut leaves = Vec::new();
            for (key, member) in entries {
                leaves.extend(flatten(member, &join_key(base_path, key), options));
            }
            if leaves.is_empty() {
                leaves.push(Leaf {
                    path: base_path.to_string(),
                    value: Value::Object(JsonMap::new()),
                });
            }
            leaves
        }
    }
}
