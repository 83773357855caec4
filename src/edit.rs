//! Typed edit records — the engine's output.
//!
//! A diff run produces an ordered `Vec<Edit>`: depth-first, object keys in
//! ascending lexicographic order at each level, array indices ascending
//! (match order for unordered arrays), and within one unordered array
//! comparison the unmatched-removed entries before the unmatched-added.
//!
//! `Edit` serializes to the wire shape downstream renderers consume:
//!
//! ```json
//! {"type": "changed", "path": "user.age", "left": 30, "right": 31}
//! {"type": "added", "path": "tags[2]", "value": "new"}
//! ```

use crate::Value;
use serde::Serialize;

/// One leaf-level discrepancy between the two compared documents.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{diff, value, Edit};
///
/// let edits = diff(&value!({"a": 1}), &value!({"a": 1, "b": 2}));
/// assert_eq!(
///     edits,
///     vec![Edit::Added { path: "b".to_string(), value: value!(2) }]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Edit {
    /// A leaf present only in the right-hand tree.
    Added { path: String, value: Value },
    /// A leaf present only in the left-hand tree.
    Removed { path: String, value: Value },
    /// A leaf (or type-mismatched node) present in both but unequal.
    Changed {
        path: String,
        left: Value,
        right: Value,
    },
}

impl Edit {
    /// The normalized path of the affected node.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Edit::Added { path, .. } | Edit::Removed { path, .. } | Edit::Changed { path, .. } => {
                path
            }
        }
    }

    /// Returns `true` for an [`Edit::Added`].
    #[inline]
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Edit::Added { .. })
    }

    /// Returns `true` for an [`Edit::Removed`].
    #[inline]
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self, Edit::Removed { .. })
    }

    /// Returns `true` for an [`Edit::Changed`].
    #[inline]
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Edit::Changed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn serializes_to_tagged_records() {
        let added = Edit::Added {
            path: "b".to_string(),
            value: value!(2),
        };
        assert_eq!(
            serde_json::to_string(&added).unwrap(),
            r#"{"type":"added","path":"b","value":2}"#
        );

        let changed = Edit::Changed {
            path: "".to_string(),
            left: value!(1),
            right: value!("1"),
        };
        assert_eq!(
            serde_json::to_string(&changed).unwrap(),
            r#"{"type":"changed","path":"","left":1,"right":"1"}"#
        );
    }

    #[test]
    fn path_accessor_covers_all_variants() {
        let edits = [
            Edit::Added { path: "a".to_string(), value: value!(1) },
            Edit::Removed { path: "b".to_string(), value: value!(2) },
            Edit::Changed { path: "c".to_string(), left: value!(1), right: value!(2) },
        ];
        let paths: Vec<&str> = edits.iter().map(Edit::path).collect();
        assert_eq!(paths, ["a", "b", "c"]);
    }
}
