//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the pure [`GameView`] maps core
//! game state into a [`TextFrame`], and [`TerminalScreen`] owns the raw-mode
//! terminal and flushes frames to it with queued crossterm commands.
//!
//! Keeping the view pure means the whole presentation of a board can be
//! asserted on in unit tests without a terminal.

pub mod frame;
pub mod screen;
pub mod view;

pub use tui_dodger_core as core;
pub use tui_dodger_types as types;

pub use frame::{Glyph, Style, TextFrame};
pub use screen::TerminalScreen;
pub use view::{GameView, Viewport};
