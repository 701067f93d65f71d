//! Pure state transitions: (GreetingState, Action) → Transition.
//!
//! Every name edit is turned into the full new text before it reaches the
//! controller, so the controller only ever sees whole-field replacements.

use std::time::Instant;

use crate::greeting::{Command, GreetingState};

use super::state::{Action, App, Transition};

/// Pure state transition function.
pub fn update(mut state: GreetingState, action: &Action) -> Transition {
    let command = match action {
        Action::Quit => return Transition::Quit,
        Action::Type(c) => {
            let mut name = state.name().to_string();
            name.push(*c);
            Command::NameChanged(name)
        }
        Action::Backspace => {
            let mut name = state.name().to_string();
            name.pop();
            Command::NameChanged(name)
        }
        Action::ClearName => Command::NameChanged(String::new()),
        Action::Greet => Command::GreetPressed,
        Action::Toggle => Command::TogglePressed,
    };

    state.apply(command);
    Transition::State(state)
}

/// Run an action against the app, starting any animations the change calls for.
pub fn handle_action(app: &mut App, action: &Action, now: Instant) {
    match update(app.greeting.clone(), action) {
        Transition::State(next) => {
            app.animations.observe(&app.greeting, &next, now);
            app.greeting = next;
        }
        Transition::Quit => {
            tracing::info!("quit requested");
            app.should_quit = true;
        }
    }
}

/// Animation frame: retire anything that has finished.
pub fn handle_tick(app: &mut App, now: Instant) {
    app.animations.settle(now);
}

// ============================================================================
// TESTS
// ============================================================================
