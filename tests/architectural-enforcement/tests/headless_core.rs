//! Integration Test: Headless Core
//!
//! **Policy**: `catalog/core` is pure browsing logic. It MUST NOT depend on
//! or import a terminal/UI framework, and MUST NOT print. Surfaces own the
//! screen and the output streams; the core talks through return values and
//! `tracing`.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm", "termion", "cursive"];

/// The core manifest lists no UI crates
#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("catalog/core/Cargo.toml")).unwrap();

    let offenders: Vec<&str> = UI_CRATES
        .iter()
        .copied()
        .filter(|name| {
            manifest.lines().map(str::trim_start).any(|line| {
                line.starts_with(&format!("{name} ")) || line.starts_with(&format!("{name}="))
            })
        })
        .collect();

    assert!(
        offenders.is_empty(),
        "catalog-core must stay headless, found UI dependencies: {offenders:?}"
    );
}

/// Core source never names a UI crate
#[test]
fn test_core_source_has_no_ui_imports() {
    let violations = find_violations(&["catalog/core/src"], |code| {
        UI_CRATES
            .iter()
            .any(|name| code.contains(&format!("{name}::")))
    });

    if !violations.is_empty() {
        eprintln!("\nUI imports found in catalog-core:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        panic!(
            "\nFound {} UI import(s) in the headless core.",
            violations.len()
        );
    }
}

/// Core source never prints
#[test]
fn test_core_does_not_print() {
    let violations = find_violations(&["catalog/core/src"], |code| {
        ["println!(", "print!(", "eprintln!(", "eprint!(", "dbg!("]
            .iter()
            .any(|m| code.contains(m))
    });

    if !violations.is_empty() {
        eprintln!("\nDirect output found in catalog-core (use tracing or return a String):\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        panic!("\nFound {} print call(s) in catalog-core.", violations.len());
    }
}
