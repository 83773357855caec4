//! Canonical fingerprints for option-aware value equivalence.
//!
//! [`fingerprint`] renders a value as a canonical string such that two
//! values have equal fingerprints exactly when they are equivalent under
//! the current [`DiffOptions`]: case folding applied to every nested
//! string, ignored keys dropped, object keys sorted, and array elements
//! sorted when element order is ignored.
//!
//! The unordered array matcher uses fingerprints as hash keys to pair
//! elements by content rather than position. Fingerprints are never
//! substituted for the literal values in reported edits.
//!
//! Scalars fingerprint to their bare text (`null`, `true`, `42`, `abc`),
//! so a scalar can collide with the string spelling the same text. Such
//! cross-type collisions only influence which array elements get paired
//! for recursive comparison; the stable greedy pairing keeps the outcome
//! deterministic.

use crate::value::write_escaped;
use crate::{DiffOptions, Value};

/// Renders `value` as its canonical fingerprint under `options`.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{fingerprint, value, DiffOptions};
///
/// let unordered = DiffOptions::new().with_ignore_order(true);
/// let a = value!([1, 2, 3]);
/// let b = value!([3, 2, 1]);
/// assert_eq!(fingerprint(&a, &unordered), fingerprint(&b, &unordered));
/// assert_ne!(fingerprint(&a, &DiffOptions::new()), fingerprint(&b, &DiffOptions::new()));
/// ```
#[must_use]
pub fn fingerprint(value: &Value, options: &DiffOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if options.ignore_case {
                s.to_lowercase()
            } else {
                s.clone()
            }
        }
        Value::Array(elements) => {
            let mut parts: Vec<String> = elements
                .iter()
                .map(|element| fingerprint(element, options))
                .collect();
            if options.ignore_order {
                parts.sort();
            }
            let mut out = String::from("[");
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(&mut out, part);
            }
            out.push(']');
            out
        }
        Value::Object(members) => {
            let mut entries: Vec<(&String, &Value)> = members
                .iter()
                .filter(|(key, _)| !options.ignores_key(key.as_str()))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = String::from("{");
            for (i, (key, member)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(&mut out, key);
                out.push(':');
                write_escaped(&mut out, &fingerprint(member, options));
            }
            out.push('}');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn scalars_use_bare_text() {
        let options = DiffOptions::new();
        assert_eq!(fingerprint(&value!(null), &options), "null");
        assert_eq!(fingerprint(&value!(true), &options), "true");
        assert_eq!(fingerprint(&value!(42), &options), "42");
        assert_eq!(fingerprint(&value!(2.5), &options), "2.5");
        assert_eq!(fingerprint(&value!("Abc"), &options), "Abc");
    }

    #[test]
    fn equal_numbers_fingerprint_identically() {
        let options = DiffOptions::new();
        assert_eq!(
            fingerprint(&value!(1), &options),
            fingerprint(&value!(1.0), &options)
        );
    }

    #[test]
    fn case_folding_applies_to_nested_strings() {
        let folded = DiffOptions::new().with_ignore_case(true);
        let a = value!({"tags": ["Rust", "JSON"]});
        let b = value!({"tags": ["rust", "json"]});
        assert_eq!(fingerprint(&a, &folded), fingerprint(&b, &folded));
        assert_ne!(
            fingerprint(&a, &DiffOptions::new()),
            fingerprint(&b, &DiffOptions::new())
        );
    }

    #[test]
    fn object_keys_sort_and_ignored_keys_drop() {
        let options = DiffOptions::new().with_ignore_keys(["id"]);
        let a = value!({"b": 2, "a": 1, "id": 10});
        let b = value!({"a": 1, "id": 99, "b": 2});
        assert_eq!(fingerprint(&a, &options), fingerprint(&b, &options));
    }

    #[test]
    fn array_order_matters_only_when_kept() {
        let a = value!([{"x": 1}, {"x": 2}]);
        let b = value!([{"x": 2}, {"x": 1}]);
        let unordered = DiffOptions::new().with_ignore_order(true);
        assert_eq!(fingerprint(&a, &unordered), fingerprint(&b, &unordered));
        assert_ne!(
            fingerprint(&a, &DiffOptions::new()),
            fingerprint(&b, &DiffOptions::new())
        );
    }

    #[test]
    fn string_and_array_of_that_string_differ() {
        let options = DiffOptions::new();
        assert_ne!(
            fingerprint(&value!("a"), &options),
            fingerprint(&value!(["a"]), &options)
        );
    }

    #[test]
    fn quoting_keeps_structures_unambiguous() {
        let options = DiffOptions::new();
        // An element containing a comma cannot smear into two elements
        let a = value!(["a,b"]);
        let b = value!(["a", "b"]);
        assert_ne!(fingerprint(&a, &options), fingerprint(&b, &options));
    }
}
