//! The three ignore options, individually and combined.
//!
//! Run with: cargo run --example ignore_rules

use json_deep_diff::{diff_with_options, from_str, value, DiffOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let left = value!({
        "id": 101,
        "title": "Launch Checklist",
        "labels": ["Ops", "Urgent"],
        "updatedAt": "2026-08-01T09:00:00Z"
    });
    let right = value!({
        "id": 102,
        "title": "launch checklist",
        "labels": ["urgent", "ops"],
        "updatedAt": "2026-08-04T12:30:00Z"
    });

    let strict = diff_with_options(&left, &right, &DiffOptions::new());
    println!("strict comparison: {} edit(s)", strict.len());
    for edit in &strict {
        println!("  {}", serde_json::to_string(edit)?);
    }

    let relaxed = DiffOptions::new()
        .with_ignore_case(true)
        .with_ignore_order(true)
        .with_ignore_keys(["id", "updatedAt"]);
    let edits = diff_with_options(&left, &right, &relaxed);
    println!("\nrelaxed comparison: {} edit(s)", edits.len());

    // Options can also arrive as a JSON record; malformed fields fall back
    // to safe defaults instead of failing
    let record = from_str(r#"{"ignoreCase": true, "ignoreOrder": "oops", "ignoreKeys": ["id"]}"#)?;
    let lenient = DiffOptions::from_value(&record);
    println!(
        "\nfrom JSON record: ignore_case={} ignore_order={} ignored keys={:?}",
        lenient.ignore_case, lenient.ignore_order, lenient.ignore_keys
    );

    Ok(())
}
