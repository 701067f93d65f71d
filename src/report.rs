//! Report formatting for screen state.
//!
//! Pure functions: (GreetingState, OutputFormat) → String.
//! No I/O, no side effects.

use crate::greeting::GreetingState;
use crate::types::{OutputFormat, BLESSINGS, PALETTE};

/// Format the current state for output.
pub fn format_state(state: &GreetingState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(state),
        OutputFormat::Json => format_json(state),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(state: &GreetingState) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", state.message()));
    if state.show_extra_message() {
        out.push_str(&format!("  {}\n", state.blessing()));
    }
    out.push('\n');

    out.push_str("=== State ===\n");
    out.push_str(&format!("Name:       {:?}\n", state.name()));
    out.push_str(&format!(
        "Background: {} ({}/{})\n",
        state.background().to_hex(),
        state.background_index() + 1,
        PALETTE.len()
    ));
    out.push_str(&format!(
        "Blessing:   {}/{} ({})\n",
        state.extra_message_index() + 1,
        BLESSINGS.len(),
        if state.show_extra_message() { "shown" } else { "hidden" }
    ));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(state: &GreetingState) -> String {
    // Plain data; serialization cannot fail in practice
    let mut out = serde_json::to_string_pretty(&state.snapshot())
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
    out.push('\n');
    out
}

/// List the blessings, one numbered line each.
pub fn format_blessings() -> String {
    BLESSINGS
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{}. {}\n", i + 1, b))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
