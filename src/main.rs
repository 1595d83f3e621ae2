//! Terminal lane-dodger runner (default binary).
//!
//! Drives the game loop controller from a crossterm event loop: render,
//! poll input with a timeout until the next frame, feed elapsed time back
//! into the controller.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_dodger::core::{GameConfig, GameLoopController, GameObserver, SystemRandom};
use tui_dodger::input::{command_for_key, should_quit};
use tui_dodger::term::{GameView, TerminalScreen, Viewport};
use tui_dodger::types::PlayerCommand;

/// Render/input cadence. Scroll ticks are paced separately by the
/// controller's timing curve.
const FRAME: Duration = Duration::from_millis(33);

/// Session-scoped observer: tracks the best score across restarts for the
/// HUD.
#[derive(Debug, Default)]
struct SessionStats {
    best_score: i64,
}

impl SessionStats {
    fn best_score(&self) -> i64 {
        self.best_score
    }
}

impl GameObserver for SessionStats {
    fn on_score_update(&mut self, score: i64) {
        self.best_score = self.best_score.max(score);
    }

    fn on_game_over(&mut self, final_score: i64) {
        self.best_score = self.best_score.max(final_score);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let mut game = GameLoopController::new(
        GameConfig::default(),
        SystemRandom::new(),
        SessionStats::default(),
    )?;
    game.start();

    let view = GameView::default();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(
            game.grid(),
            game.game(),
            game.phase(),
            game.observer().best_score(),
            Viewport::new(w, h),
        );
        screen.draw(&frame)?;

        // Input with timeout until the next frame.
        let timeout = FRAME
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match command_for_key(key) {
                        Some(PlayerCommand::MoveLeft) => game.move_left(),
                        Some(PlayerCommand::MoveRight) => game.move_right(),
                        Some(PlayerCommand::Pause) => game.toggle_pause(),
                        Some(PlayerCommand::Restart) => game.restart(),
                        None => {}
                    }
                }
            }
        }

        // Advance the simulation by the wall-clock time this frame took.
        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        game.on_frame(elapsed);
    }
}
