//! Fixed content and shared value types for karibu.
//!
//! Everything here is constant data consumed by the controller and the
//! presentation layers. Nothing in this module is ever mutated.

use serde::{Serialize, Serializer};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// An opaque 24-bit RGB colour.
///
/// Kept free of any rendering crate so the controller stays
/// presentation-agnostic; the TUI converts it at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Returns the colour as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

// ============================================================================
// FIXED CONTENT
// ============================================================================

/// Shown on a fresh screen and whenever the greeting is requested for a blank name.
pub const DEFAULT_MESSAGE: &str = "Rejoice in the Lord always!";

/// Rotating blessings, cycled by the toggle action. Order is fixed.
pub const BLESSINGS: [&str; 5] = [
    "May your day be filled with joy and peace! ✨",
    "Believe in yourself and all that you are. 💫",
    "Good things are coming your way today! 🌞",
    "Keep smiling, the world is brighter with you. 😊",
    "Trust the process and enjoy the journey. 🌿",
];

/// Background colours, cycled by the greet action. Order is fixed.
pub const PALETTE: [Rgb; 4] = [
    Rgb::from_hex(0xE3F2FD), // light blue
    Rgb::from_hex(0xFFF3E0), // light orange
    Rgb::from_hex(0xE8F5E9), // light green
    Rgb::from_hex(0xFCE4EC), // light pink
];

// ============================================================================
// ACCENT COLOURS
// ============================================================================

/// Greeting text.
pub const MESSAGE_COLOR: Rgb = Rgb::from_hex(0x0D47A1);

/// Blessing text.
pub const BLESSING_COLOR: Rgb = Rgb::from_hex(0x1B5E20);

/// "Greet Me" button fill.
pub const GREET_BUTTON_COLOR: Rgb = Rgb::from_hex(0x1976D2);

/// "Toggle Blessing" button fill.
pub const TOGGLE_BUTTON_COLOR: Rgb = Rgb::from_hex(0x43A047);

/// Input field underline while focused.
pub const INPUT_FOCUSED_COLOR: Rgb = Rgb::from_hex(0x0D47A1);

/// Logo card and input field fill.
pub const CARD_COLOR: Rgb = Rgb::from_hex(0xFFFFFF);

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for state reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Rgb::from_hex(0x0D47A1), Rgb(0x0D, 0x47, 0xA1));
    }

    #[test]
    fn to_hex_is_lowercase_with_hash() {
        assert_eq!(Rgb(0xE3, 0xF2, 0xFD).to_hex(), "#e3f2fd");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&PALETTE[2]).unwrap();
        assert_eq!(json, "\"#e8f5e9\"");
    }

    #[test]
    fn fixed_content_sizes() {
        assert_eq!(BLESSINGS.len(), 5);
        assert_eq!(PALETTE.len(), 4);
        assert!(!DEFAULT_MESSAGE.is_empty());
    }

    #[test]
    fn blessings_keep_their_order() {
        assert!(BLESSINGS[0].starts_with("May your day"));
        assert!(BLESSINGS[4].starts_with("Trust the process"));
    }
}
