//! Scripted replay of user actions, for driving the controller without a terminal.
//!
//! A script is a list of steps:
//! - `name=<text>`: the name field now holds `<text>` (may be empty)
//! - `greet`: press "Greet Me"
//! - `toggle`: press "Toggle Blessing"
//!
//! Steps are matched exactly; nothing is trimmed, so name text keeps its
//! surrounding whitespace.

use thiserror::Error;

use crate::greeting::{Command, GreetingState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("step {position}: unknown step '{step}' (expected name=<text>, greet or toggle)")]
    UnknownStep { position: usize, step: String },
}

/// Parse one step. `position` is 1-based and only used for error reporting.
pub fn parse_step(step: &str, position: usize) -> Result<Command, ScriptError> {
    if let Some(text) = step.strip_prefix("name=") {
        return Ok(Command::NameChanged(text.to_string()));
    }

    match step {
        "greet" => Ok(Command::GreetPressed),
        "toggle" => Ok(Command::TogglePressed),
        _ => Err(ScriptError::UnknownStep {
            position,
            step: step.to_string(),
        }),
    }
}

/// Parse every step, stopping at the first bad one.
pub fn parse_steps<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Command>, ScriptError> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| parse_step(step.as_ref(), i + 1))
        .collect()
}

/// Apply commands, in order, to a fresh screen.
pub fn replay(commands: impl IntoIterator<Item = Command>) -> GreetingState {
    let mut state = GreetingState::default();
    for command in commands {
        state.apply(command);
    }
    state
}

// ============================================================================
// TESTS
// ============================================================================
