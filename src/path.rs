//! Path construction and inspection.
//!
//! A path addresses one node in a JSON tree relative to the document root:
//! object keys joined with `.`, array indices as bracketed segments, e.g.
//! `meta.id`, `tags[0]`, `user.roles[2].name`. The empty string denotes the
//! root itself, so a root-level scalar change is reported with path `""`.
//!
//! Keys containing `.` or `[` produce ambiguous path text; the engine does
//! not escape them. Edits still carry correct values, only the path string
//! loses its one-to-one reading.

/// Appends an object key to a base path.
pub(crate) fn join_key(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        let mut path = String::with_capacity(base.len() + key.len() + 1);
        path.push_str(base);
        path.push('.');
        path.push_str(key);
        path
    }
}

/// Appends an array index to a base path.
pub(crate) fn join_index(base: &str, index: usize) -> String {
    format!("{}[{}]", base, index)
}

/// Returns the object key of the last path segment, with any trailing
/// bracket-index segments stripped, or `None` for the root and for pure
/// index paths like `[3]`.
pub(crate) fn final_key(path: &str) -> Option<&str> {
    let mut end = path.len();
    // Trim trailing "[digits]" groups; anything before them is the key
    while path[..end].ends_with(']') {
        match path[..end].rfind('[') {
            Some(open) if path[open + 1..end - 1].bytes().all(|b| b.is_ascii_digit()) => {
                end = open;
            }
            _ => break,
        }
    }
    let trimmed = &path[..end];
    if trimmed.is_empty() {
        return None;
    }
    let start = trimmed.rfind('.').map_or(0, |dot| dot + 1);
    let key = &trimmed[start..];
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
