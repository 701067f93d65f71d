//! karibu: a one-screen greeter with rotating blessings.

pub mod greeting;
pub mod logging;
pub mod report;
pub mod script;
pub mod tui;
pub mod types;
