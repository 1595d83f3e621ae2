//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole lane-evasion simulation: grid state, the
//! transition engine, the difficulty curve and the orchestration loop. It
//! has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: given a scripted/seeded randomness source, the same
//!   inputs produce identical games
//! - **Testable**: every rule has unit coverage against scripted traffic
//! - **Portable**: runs in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the `rows x columns` lane playfield with its derived queries
//! - [`engine`]: the pure transition function `(grid, actions) -> (grid, effects)`
//! - [`timing`]: difficulty level to tick interval curve
//! - [`controller`]: tick-and-input orchestration plus the observer interface
//! - [`rng`]: bounded-integer randomness abstraction and its implementations
//!
//! # Game Rules
//!
//! - The player token sits on the last row and moves laterally, clamped at
//!   the road edges.
//! - On every scroll tick a new traffic row appears at the far end and every
//!   row steps toward the player; the row directly above the player is
//!   consumed and resolved: a car under the player is a collision, otherwise
//!   every car in that row scores a point.
//! - Every spawned row keeps at least one open lane, so no board is
//!   unwinnable.
//! - The difficulty level is derived from the score and shortens the tick
//!   interval along a logarithmic curve.
//! - A collision costs a life; at zero lives the run ends.
//!
//! # Example
//!
//! ```
//! use tui_dodger_core::{GameConfig, GameLoopController, SeededRandom};
//! use std::time::Duration;
//!
//! let mut game = GameLoopController::new(
//!     GameConfig::default(),
//!     SeededRandom::new(12345),
//!     (), // null observer
//! )
//! .unwrap();
//!
//! game.start();
//! game.move_left();
//! game.on_frame(Duration::from_millis(950));
//!
//! assert!(game.is_running());
//! assert_eq!(game.grid().rows(), 8);
//! ```

pub mod controller;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod timing;

pub use tui_dodger_types as types;

// Re-export commonly used types for convenience
pub use controller::{
    GameConfig, GameLoopController, GameObserver, GameState, PauseKind, RunPhase,
};
pub use engine::GridEngine;
pub use grid::{GridDims, GridError, GridState};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, SystemRandom};
pub use timing::TimingCurve;
