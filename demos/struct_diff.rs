//! Diff two Rust structs directly — configuration drift without JSON text.
//!
//! Run with: cargo run --example struct_diff

use json_deep_diff::{diff_with_options, to_value, DiffOptions, Edit};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct ServiceConfig {
    name: String,
    replicas: u32,
    ports: Vec<u16>,
    env: Environment,
}

#[derive(Serialize)]
struct Environment {
    log_level: String,
    cache_ttl_secs: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let deployed = ServiceConfig {
        name: "billing".to_string(),
        replicas: 3,
        ports: vec![8080, 9090],
        env: Environment {
            log_level: "info".to_string(),
            cache_ttl_secs: 300,
        },
    };

    let desired = ServiceConfig {
        name: "billing".to_string(),
        replicas: 5,
        ports: vec![9090, 8080],
        env: Environment {
            log_level: "warn".to_string(),
            cache_ttl_secs: 300,
        },
    };

    let left = to_value(&deployed)?;
    let right = to_value(&desired)?;

    // Port order is not meaningful for this service
    let options = DiffOptions::new().with_ignore_order(true);
    let edits = diff_with_options(&left, &right, &options);

    println!("config drift ({} item(s)):", edits.len());
    for edit in &edits {
        if let Edit::Changed { path, left, right } = edit {
            println!("  {}: {} -> {}", path, left, right);
        }
    }

    Ok(())
}
