//! # json-deep-diff
//!
//! A structural, leaf-level diff between two arbitrary JSON values.
//!
//! ## What it does
//!
//! Given two parsed JSON documents, the engine reports every discrepancy as
//! a flat list of typed edits — [`Edit::Added`], [`Edit::Removed`],
//! [`Edit::Changed`] — each tagged with a normalized path like `meta.id` or
//! `user.roles[2].name`. Comparison is configurable to ignore array element
//! ordering, string case, and an arbitrary set of object keys anywhere in
//! the tree (volatile fields like timestamps or surrogate ids).
//!
//! ## Key Features
//!
//! - **Leaf granularity**: a subtree present on only one side is reported
//!   leaf by leaf, never as one opaque "object added" edit
//! - **Unordered array matching**: with `ignore_order`, arrays compare as
//!   multisets; permutations produce zero edits and near-matches are paired
//!   up and recursed so a single changed field still surfaces precisely
//! - **Deterministic output**: depth-first emission with object keys in
//!   sorted order, independent of either document's member order
//! - **Total over its domain**: any combination of nulls, empty containers
//!   and mixed types diffs without panicking; malformed option records are
//!   sanitized, not rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use json_deep_diff::{diff_str, DiffOptions};
//!
//! let options = DiffOptions::new().with_ignore_keys(["id"]);
//! let edits = diff_str(
//!     r#"{"id": 1, "name": "Alice", "age": 30}"#,
//!     r#"{"id": 2, "name": "Alice", "age": 31}"#,
//!     &options,
//! ).unwrap();
//!
//! assert_eq!(edits.len(), 1);
//! assert_eq!(edits[0].path(), "age");
//! ```
//!
//! Or on already-parsed values:
//!
//! ```rust
//! use json_deep_diff::{diff, value};
//!
//! let left = value!({"tags": ["a", "b"]});
//! let right = value!({"tags": ["a", "b", "c"]});
//!
//! let edits = diff(&left, &right);
//! assert_eq!(edits[0].path(), "tags[2]");
//! ```
//!
//! ## Scope
//!
//! The engine is synchronous, in-memory and pure: one call compares one
//! document pair and returns the same edit list for the same inputs every
//! time. It generates no patches, performs no three-way merges, and holds
//! no state between calls — independent document pairs can be diffed
//! concurrently from multiple threads without locking.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - parse two JSON texts and print the edit list
//! - **`ignore_rules.rs`** - the three ignore options in action
//! - **`struct_diff.rs`** - diff two Rust structs via `to_value`
//!
//! Run any example with: `cargo run --example <name>`

mod diff;
pub mod edit;
pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
mod path;
pub mod ser;
pub mod value;

pub use edit::Edit;
pub use error::{Error, Result};
pub use flatten::{flatten, Leaf};
pub use map::JsonMap;
pub use normalize::fingerprint;
pub use options::DiffOptions;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Compares two values with default options and returns the ordered edit
/// list.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{diff, value};
///
/// let edits = diff(&value!({"a": 1}), &value!({"a": 2}));
/// assert_eq!(edits.len(), 1);
/// assert!(edits[0].is_changed());
/// ```
#[must_use]
pub fn diff(left: &Value, right: &Value) -> Vec<Edit> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Compares two values under the given options and returns the ordered
/// edit list.
///
/// Identical values (under the options) produce an empty list. Swapping
/// the inputs swaps every added edit for a removed one and the `left`/
/// `right` of every changed edit, over the same set of paths.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{diff_with_options, value, DiffOptions};
///
/// let options = DiffOptions::new().with_ignore_order(true);
/// let edits = diff_with_options(&value!([1, 2, 3]), &value!([3, 2, 1]), &options);
/// assert!(edits.is_empty());
/// ```
#[must_use]
pub fn diff_with_options(left: &Value, right: &Value, options: &DiffOptions) -> Vec<Edit> {
    diff::diff_values(left, right, options)
}

/// Parses two JSON texts and compares them under the given options.
///
/// # Errors
///
/// Returns [`Error::Parse`] if either input is not valid JSON; the error
/// carries line and column information.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{diff_str, DiffOptions};
///
/// let edits = diff_str("[1, 2]", "[1, 2, 3]", &DiffOptions::new()).unwrap();
/// assert_eq!(edits[0].path(), "[2]");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn diff_str(left: &str, right: &str, options: &DiffOptions) -> Result<Vec<Edit>> {
    let left = from_str(left)?;
    let right = from_str(right)?;
    Ok(diff_with_options(&left, &right, options))
}

/// Parses a string of JSON text into a [`Value`].
///
/// Object member order is preserved as written; it has no effect on
/// comparison.
///
/// # Errors
///
/// Returns [`Error::Parse`] with line and column information if the input
/// is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::from_str;
///
/// let doc = from_str(r#"{"x": 1, "y": [true, null]}"#).unwrap();
/// assert!(doc.is_object());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    serde_json::from_str(s).map_err(Error::from)
}

/// Parses bytes of JSON text into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the bytes are not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    serde_json::from_slice(v).map_err(Error::from)
}

/// Reads JSON text from an I/O stream and parses it into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] if the
/// content is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert!(doc.is_array());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Useful for diffing Rust data structures directly (configuration drift,
/// state snapshots) without a round-trip through JSON text.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON (e.g. a
/// map with non-string keys).
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
