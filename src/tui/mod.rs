//! TUI module for the interactive greeting screen.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions onto the greeting controller
//! - `animation`: Pure fade/slide timing
//! - `view`: Pure rendering
//! - `theme`: Colours and styles
//! - `run`: Effects (terminal, threads, event loop)

pub mod animation;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
