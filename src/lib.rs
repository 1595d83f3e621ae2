//! TUI Dodger (workspace facade crate).
//!
//! This package keeps a stable `tui_dodger::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_dodger_core as core;
pub use tui_dodger_input as input;
pub use tui_dodger_term as term;
pub use tui_dodger_types as types;
