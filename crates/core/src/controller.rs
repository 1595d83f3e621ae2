//! Controller module - tick-and-input orchestration.
//!
//! [`GameLoopController`] owns the current grid, the run's score/lives
//! bookkeeping and the difficulty curve. The host drives it from its render
//! loop with [`GameLoopController::on_frame`] and forwards player intent
//! through the immediate-move entry points; the controller decides when a
//! scroll tick is due, asks the engine for the next grid, folds the
//! resulting effects into game state, and reports everything to an observer.
//!
//! Everything is synchronous and single-threaded: observer notifications
//! fire in the exact order the effects were generated, before the producing
//! call returns.

use std::time::Duration;

use tui_dodger_types::{
    Action, Direction, Effect, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_QUIET_TICKS,
    LEVEL_SCORE_STEP, STARTING_LIVES,
};

use crate::engine::GridEngine;
use crate::grid::{GridDims, GridError, GridState};
use crate::rng::RandomSource;
use crate::timing::TimingCurve;

/// Collaborator interface for game events.
///
/// All methods are called synchronously from within `on_frame`/`on_move`
/// (and the lifecycle calls), in the order the underlying effects were
/// generated. Every method has a no-op default so hosts implement only what
/// they care about; `()` serves as the null observer.
pub trait GameObserver {
    fn on_score_update(&mut self, _score: i64) {}
    fn on_collision(&mut self) {}
    fn on_grid_update(&mut self) {}
    fn on_pause_state_change(&mut self, _is_paused: bool) {}
    fn on_game_over(&mut self, _final_score: i64) {}
}

impl GameObserver for () {}

/// Why the run is paused.
///
/// A user pause is resumable through the pause toggle; a collision pause is
/// an internal stop while game-over resolution completes and cannot be
/// resumed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    User,
    Collision,
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Before the first start.
    Idle,
    /// Ticking and accepting moves.
    Running,
    /// Halted; see [`PauseKind`].
    Paused(PauseKind),
    /// Lives exhausted. Only a restart leaves this phase.
    GameOver,
}

/// Score/lives bookkeeping for one run.
///
/// The difficulty level is derived from the score on every read and never
/// stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    score: i64,
    lives: u32,
    is_paused: bool,
}

impl GameState {
    fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            is_paused: false,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Difficulty level: one tier per `LEVEL_SCORE_STEP` points, starting
    /// at 1.
    pub fn level(&self) -> u32 {
        (self.score / LEVEL_SCORE_STEP + 1) as u32
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }
}

/// Tunables for a controller instance.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub starting_lives: u32,
    /// Scroll ticks after (re)start that insert guaranteed empty rows,
    /// giving the player a quiet run-up before traffic begins.
    pub quiet_ticks: u32,
    pub curve: TimingCurve,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            columns: DEFAULT_GRID_COLUMNS,
            starting_lives: STARTING_LIVES,
            quiet_ticks: DEFAULT_QUIET_TICKS,
            curve: TimingCurve::default(),
        }
    }
}

/// Stateful orchestrator driving the engine from host frames and input.
pub struct GameLoopController<R: RandomSource, O: GameObserver> {
    dims: GridDims,
    starting_lives: u32,
    quiet_ticks: u32,
    curve: TimingCurve,
    engine: GridEngine<R>,
    observer: O,
    grid: GridState,
    game: GameState,
    phase: RunPhase,
    /// Time accumulated since the last processed tick.
    since_last_tick: Duration,
    quiet_remaining: u32,
}

impl<R: RandomSource, O: GameObserver> GameLoopController<R, O> {
    /// Build a controller. Grid dimensions are validated once here; every
    /// later board rebuild is infallible.
    pub fn new(config: GameConfig, random: R, observer: O) -> Result<Self, GridError> {
        let dims = GridDims::new(config.rows, config.columns)?;
        Ok(Self {
            dims,
            starting_lives: config.starting_lives,
            quiet_ticks: config.quiet_ticks,
            curve: config.curve,
            engine: GridEngine::new(random),
            observer,
            grid: GridState::with_dims(dims),
            game: GameState::new(config.starting_lives),
            phase: RunPhase::Idle,
            since_last_tick: Duration::ZERO,
            quiet_remaining: 0,
        })
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Interval until the next tick at the current difficulty level.
    pub fn tick_interval(&self) -> Duration {
        self.curve.interval_for_level(self.game.level())
    }

    /// Begin a run: fresh grid, fresh game state, `Running`.
    pub fn start(&mut self) {
        self.grid = GridState::with_dims(self.dims);
        self.game = GameState::new(self.starting_lives);
        self.phase = RunPhase::Running;
        self.since_last_tick = Duration::ZERO;
        self.quiet_remaining = self.quiet_ticks;
        self.observer.on_grid_update();
    }

    /// Abandon the current run and begin a new one.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Host frame callback: accumulate elapsed time and run a scroll tick
    /// when one is due. No-op unless `Running`.
    pub fn on_frame(&mut self, elapsed: Duration) {
        if self.phase != RunPhase::Running {
            return;
        }

        self.since_last_tick += elapsed;
        if self.since_last_tick < self.tick_interval() {
            return;
        }
        self.since_last_tick = Duration::ZERO;
        self.advance_tick();
    }

    /// Immediate lateral move, outside the tick cadence. No-op unless
    /// `Running`.
    pub fn on_move(&mut self, direction: Direction) {
        if self.phase != RunPhase::Running {
            return;
        }

        let (next, effects) = self
            .engine
            .next_grid(&self.grid, &[Action::MoveCar(direction)]);
        // Moves never resolve the penultimate row, so they carry no effects.
        debug_assert!(effects.is_empty());
        self.grid = next;
        self.observer.on_grid_update();
    }

    pub fn move_left(&mut self) {
        self.on_move(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.on_move(Direction::Right);
    }

    /// User-level pause. Only meaningful while `Running`.
    pub fn pause(&mut self) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.phase = RunPhase::Paused(PauseKind::User);
        self.game.is_paused = true;
        self.observer.on_pause_state_change(true);
    }

    /// Resume from a user pause. A collision pause is not resumable.
    pub fn resume(&mut self) {
        if self.phase != RunPhase::Paused(PauseKind::User) {
            return;
        }
        self.phase = RunPhase::Running;
        self.game.is_paused = false;
        self.observer.on_pause_state_change(false);
    }

    /// Convenience toggle for a single pause key.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            RunPhase::Running => self.pause(),
            RunPhase::Paused(PauseKind::User) => self.resume(),
            _ => {}
        }
    }

    /// Run one scroll tick and fold its effects into game state.
    fn advance_tick(&mut self) {
        // A collision with lives remaining leaves the crash marker on the
        // board for one full interval; the board is rebuilt when the next
        // tick comes due.
        if self.grid.has_crashed() {
            self.grid = GridState::with_dims(self.dims);
        }

        let action = if self.quiet_remaining > 0 {
            self.quiet_remaining -= 1;
            Action::UpdateWithEmptyRow
        } else {
            Action::Update
        };

        let (next, effects) = self.engine.next_grid(&self.grid, &[action]);
        self.grid = next;
        let fatal = self.apply_effects(&effects);
        self.observer.on_grid_update();

        if fatal {
            // Collision pause: the run halts while game-over resolution
            // completes, and the user toggle cannot revive it.
            self.phase = RunPhase::Paused(PauseKind::Collision);
            self.finish_run();
        }
    }

    /// Fold transition effects into score/lives, notifying the observer in
    /// effect order. Returns true when the run has ended.
    fn apply_effects(&mut self, effects: &[Effect]) -> bool {
        let mut fatal = false;
        for &effect in effects {
            match effect {
                Effect::Scored(points) => {
                    self.game.score += i64::from(points);
                    self.observer.on_score_update(self.game.score);
                }
                Effect::Crashed => {
                    self.game.lives = self.game.lives.saturating_sub(1);
                    self.observer.on_collision();
                    if self.game.lives == 0 {
                        fatal = true;
                    }
                }
            }
        }
        fatal
    }

    fn finish_run(&mut self) {
        self.phase = RunPhase::GameOver;
        self.game.is_paused = false;
        self.observer.on_game_over(self.game.score);
    }
}
