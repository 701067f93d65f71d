//! TUI state algebra: pure types, zero effects.
//!
//! The screen's interactive state is the controller's [`GreetingState`];
//! the TUI only adds what a terminal needs on top of it (animation
//! bookkeeping and a quit flag). Timing never leaks into the controller.

use crossterm::event::KeyEvent;

use crate::greeting::GreetingState;

use super::animation::Animations;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - A ticker thread sends `Tick` so animations keep moving between keys
///
/// The key reader sends `InputClosed` before giving up, since the ticker
/// keeps the channel open forever.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key press from the crossterm reader thread.
    Key(KeyEvent),
    /// Animation frame.
    Tick,
    /// The key reader failed and will send nothing more.
    InputClosed,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Default)]
pub struct App {
    /// The controller's state, re-read on every frame.
    pub greeting: GreetingState,

    /// In-flight fade and slide effects.
    pub animations: Animations,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the update function
/// turns them into controller commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the name field.
    Type(char),
    /// Delete the last character of the name field.
    Backspace,
    /// Empty the name field.
    ClearName,
    /// Press "Greet Me".
    Greet,
    /// Press "Toggle Blessing".
    Toggle,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this state (may be unchanged).
    State(GreetingState),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// A fresh screen: default greeting, nothing animating.
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// TESTS
// ============================================================================
