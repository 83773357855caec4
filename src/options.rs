//! Configuration options for the comparison engine.
//!
//! [`DiffOptions`] controls which differences count as differences:
//!
//! - `ignore_order`: treat arrays as unordered multisets of elements
//! - `ignore_case`: fold string scalars case-insensitively before comparing
//! - `ignore_keys`: object keys skipped entirely, anywhere in either tree
//!
//! All three default to disabled/empty.
//!
//! ## Examples
//!
//! ```rust
//! use json_deep_diff::DiffOptions;
//!
//! // Everything strict (the default)
//! let options = DiffOptions::new();
//!
//! // Order-insensitive arrays, volatile keys skipped
//! let options = DiffOptions::new()
//!     .with_ignore_order(true)
//!     .with_ignore_keys(["id", "updatedAt"]);
//! assert!(options.ignores_key("id"));
//! ```
//!
//! Callers holding an options record as JSON (the shape the original
//! drag-and-drop UI produced) can build a `DiffOptions` leniently with
//! [`DiffOptions::from_value`]; malformed fields coerce to defaults rather
//! than failing.

use crate::Value;
use std::collections::HashSet;

/// Configuration for a diff run.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{diff_with_options, value, DiffOptions};
///
/// let left = value!({"s": "Hello"});
/// let right = value!({"s": "hello"});
///
/// let strict = DiffOptions::new();
/// assert_eq!(diff_with_options(&left, &right, &strict).len(), 1);
///
/// let folded = DiffOptions::new().with_ignore_case(true);
/// assert!(diff_with_options(&left, &right, &folded).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffOptions {
    /// Treat arrays as unordered multisets of elements.
    pub ignore_order: bool,
    /// Fold strings to lowercase before equality and fingerprinting.
    pub ignore_case: bool,
    /// Object keys skipped wherever they occur, at any depth.
    pub ignore_keys: HashSet<String>,
}

impl DiffOptions {
    /// Creates default options: ordered arrays, case-sensitive strings,
    /// no ignored keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether array element order is ignored.
    #[must_use]
    pub fn with_ignore_order(mut self, ignore_order: bool) -> Self {
        self.ignore_order = ignore_order;
        self
    }

    /// Sets whether string case is ignored.
    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Sets the object keys to skip, replacing any previously set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::DiffOptions;
    ///
    /// let options = DiffOptions::new().with_ignore_keys(["id", "timestamp"]);
    /// assert!(options.ignores_key("timestamp"));
    /// assert!(!options.ignores_key("name"));
    /// ```
    #[must_use]
    pub fn with_ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `key` is in the ignore set.
    #[inline]
    #[must_use]
    pub fn ignores_key(&self, key: &str) -> bool {
        self.ignore_keys.contains(key)
    }

    /// Builds options from a JSON options record, coercing anything
    /// malformed to a safe default instead of failing.
    ///
    /// Recognized members are `ignoreOrder`, `ignoreCase` (booleans; any
    /// other type reads as `false`) and `ignoreKeys` (an array whose string
    /// entries are collected; a non-array reads as empty, non-string
    /// entries are skipped). Unrecognized members are ignored, and a
    /// non-object record yields the defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::{from_str, DiffOptions};
    ///
    /// let record = from_str(r#"{"ignoreOrder": true, "ignoreKeys": ["id", 7]}"#).unwrap();
    /// let options = DiffOptions::from_value(&record);
    /// assert!(options.ignore_order);
    /// assert!(!options.ignore_case);
    /// assert!(options.ignores_key("id"));
    /// assert_eq!(options.ignore_keys.len(), 1);
    /// ```
    #[must_use]
    pub fn from_value(record: &Value) -> Self {
        let Some(obj) = record.as_object() else {
            return Self::default();
        };
        let flag = |key: &str| obj.get(key).and_then(Value::as_bool).unwrap_or(false);
        let keys = obj
            .get("ignoreKeys")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        DiffOptions {
            ignore_order: flag("ignoreOrder"),
            ignore_case: flag("ignoreCase"),
            ignore_keys: keys,
        }
    }
}
