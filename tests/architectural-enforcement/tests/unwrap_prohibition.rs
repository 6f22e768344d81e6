//! Integration Test: Unwrap Prohibition
//!
//! **Policy**: Production code MUST NOT call `unwrap()` or `expect()`.
//! Unknown ids are no-ops, missing content becomes a placeholder, and real
//! failures (catalog files, config, terminal I/O) are returned as errors.
//!
//! Test modules (`#[cfg(test)]` and below) and doc comments are exempt.

use architectural_enforcement::find_violations;

const PRODUCTION_DIRS: &[&str] = &["catalog/core/src", "tui/src"];

#[test]
fn test_no_unwrap_in_production_code() {
    let violations = find_violations(PRODUCTION_DIRS, |code| {
        code.contains(".unwrap()") || code.contains(".expect(")
    });

    if !violations.is_empty() {
        eprintln!("\nunwrap()/expect() found in production code!\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        eprintln!("\nPropagate with `?`, or fall back with unwrap_or/unwrap_or_default.");
        panic!(
            "\nFound {} unwrap/expect call(s) in production code.",
            violations.len()
        );
    }
}

#[test]
fn test_no_panicking_macros_in_production_code() {
    let violations = find_violations(PRODUCTION_DIRS, |code| {
        ["panic!(", "todo!(", "unimplemented!("]
            .iter()
            .any(|m| code.contains(m))
    });

    assert!(
        violations.is_empty(),
        "panicking macros in production code:\n{}",
        violations.join("\n")
    );
}
