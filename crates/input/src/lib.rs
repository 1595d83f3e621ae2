//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`tui_dodger_types::PlayerCommand`]
//! values. Lane changes are discrete taps, so no auto-repeat handling is
//! needed; the mapping stays a pure function of the key event.

pub mod map;

pub use tui_dodger_types as types;

pub use map::{command_for_key, should_quit};
