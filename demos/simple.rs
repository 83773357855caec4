//! Parse two JSON texts and print every difference.
//!
//! Run with: cargo run --example simple

use json_deep_diff::{diff_str, DiffOptions, Edit};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let left = r#"{
        "name": "Alice",
        "age": 30,
        "tags": ["admin", "staff"],
        "address": {"city": "Oslo", "zip": "0150"}
    }"#;

    let right = r#"{
        "name": "Alice",
        "age": 31,
        "tags": ["admin"],
        "address": {"city": "Bergen", "zip": "0150"},
        "active": true
    }"#;

    let edits = diff_str(left, right, &DiffOptions::new())?;

    println!("{} difference(s):", edits.len());
    for edit in &edits {
        match edit {
            Edit::Added { path, value } => println!("  + {}: {}", path, value),
            Edit::Removed { path, value } => println!("  - {}: {}", path, value),
            Edit::Changed { path, left, right } => {
                println!("  ~ {}: {} -> {}", path, left, right)
            }
        }
    }

    // The same list as JSON, for machine consumers
    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&edits)?);

    Ok(())
}
