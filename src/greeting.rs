//! Greeting screen controller: the whole interactive state and its transitions.
//!
//! One owned record, three total transition operations. Presentation layers
//! (the TUI, `karibu play`) observe the record after each transition and never
//! mutate it directly. No timing, no I/O.

use serde::Serialize;

use crate::types::{Rgb, BLESSINGS, DEFAULT_MESSAGE, PALETTE};

// ============================================================================
// STATE
// ============================================================================

/// The screen's full state tuple.
///
/// Fields are private so the indices can only move through the modulo
/// updates below and `message` can never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingState {
    name: String,
    message: String,
    show_extra_message: bool,
    background_index: usize,
    extra_message_index: usize,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self {
            name: String::new(),
            message: DEFAULT_MESSAGE.to_string(),
            show_extra_message: false,
            background_index: 0,
            extra_message_index: 0,
        }
    }
}

/// A user action, as delivered by any presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The name field now holds this text.
    NameChanged(String),
    /// "Greet Me" pressed.
    GreetPressed,
    /// "Toggle Blessing" pressed.
    TogglePressed,
}

/// Serializable view of the state, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub name: String,
    pub message: String,
    pub show_extra_message: bool,
    pub background_index: usize,
    pub background: Rgb,
    pub extra_message_index: usize,
    /// Only present while the blessing is visible.
    pub blessing: Option<String>,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

impl GreetingState {
    /// Replace the name. Always accepted.
    pub fn on_name_changed(&mut self, new_text: impl Into<String>) {
        self.name = new_text.into();
    }

    /// Greet the current name, hide the blessing, advance the background.
    pub fn on_greet_pressed(&mut self) {
        self.message = greeting_for(&self.name);
        self.show_extra_message = false;
        self.background_index = (self.background_index + 1) % PALETTE.len();
    }

    /// Flip blessing visibility. The blessing only advances when it becomes visible.
    pub fn on_toggle_pressed(&mut self) {
        self.show_extra_message = !self.show_extra_message;
        if self.show_extra_message {
            self.extra_message_index = (self.extra_message_index + 1) % BLESSINGS.len();
        }
    }

    /// Dispatch a command to its transition.
    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying command");
        match command {
            Command::NameChanged(text) => self.on_name_changed(text),
            Command::GreetPressed => self.on_greet_pressed(),
            Command::TogglePressed => self.on_toggle_pressed(),
        }
    }
}

/// Greeting text for a name: the default phrase when the name is blank.
pub fn greeting_for(name: &str) -> String {
    if is_blank(name) {
        DEFAULT_MESSAGE.to_string()
    } else {
        format!("Hello {}!", name)
    }
}

/// Empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl GreetingState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn show_extra_message(&self) -> bool {
        self.show_extra_message
    }

    pub fn background_index(&self) -> usize {
        self.background_index
    }

    pub fn extra_message_index(&self) -> usize {
        self.extra_message_index
    }

    /// Blessing at the current index, whether or not it is visible.
    pub fn blessing(&self) -> &'static str {
        BLESSINGS[self.extra_message_index]
    }

    /// Current background colour.
    pub fn background(&self) -> Rgb {
        PALETTE[self.background_index]
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            name: self.name.clone(),
            message: self.message.clone(),
            show_extra_message: self.show_extra_message,
            background_index: self.background_index,
            background: self.background(),
            extra_message_index: self.extra_message_index,
            blessing: self
                .show_extra_message
                .then(|| self.blessing().to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
