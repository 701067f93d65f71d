//! TUI colour semantics and style constants.
//!
//! The screen's colours come from the fixed content in `types`; this module
//! converts them for ratatui and blends them for fades.
//!
//! Colour semantics:
//! - Deep blue: the greeting, focused input
//! - Green: the blessing
//! - Button fills: blue for greet, green for toggle, white labels
//! - Dim: help line, input label

use ratatui::style::{Color, Modifier, Style};

use crate::types::{
    Rgb, BLESSING_COLOR, CARD_COLOR, GREET_BUTTON_COLOR, INPUT_FOCUSED_COLOR, MESSAGE_COLOR,
    TOGGLE_BUTTON_COLOR,
};

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert a fixed-content colour for ratatui.
pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Mix `fg` over `bg`. `opacity` 0 gives `bg`, 1 gives `fg`.
pub fn blend(fg: Rgb, bg: Rgb, opacity: f32) -> Rgb {
    let a = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * a).round() as u8;
    Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Greeting line, at full opacity.
pub const STYLE_MESSAGE: Style = Style::new()
    .fg(color(MESSAGE_COLOR))
    .add_modifier(Modifier::BOLD);

/// Blessing line, at full opacity.
pub const STYLE_BLESSING: Style = Style::new().fg(color(BLESSING_COLOR));

/// Logo card.
pub const STYLE_CARD: Style = Style::new()
    .fg(color(MESSAGE_COLOR))
    .bg(color(CARD_COLOR))
    .add_modifier(Modifier::BOLD);

/// Name field contents.
pub const STYLE_INPUT: Style = Style::new().fg(Color::Black).bg(color(CARD_COLOR));

/// Name field border.
pub const STYLE_INPUT_BORDER: Style = Style::new().fg(color(INPUT_FOCUSED_COLOR));

/// "Greet Me" button.
pub const STYLE_GREET_BUTTON: Style = Style::new()
    .fg(Color::White)
    .bg(color(GREET_BUTTON_COLOR))
    .add_modifier(Modifier::BOLD);

/// "Toggle Blessing" button.
pub const STYLE_TOGGLE_BUTTON: Style = Style::new()
    .fg(Color::White)
    .bg(color(TOGGLE_BUTTON_COLOR))
    .add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
