//! GameView: maps core game state into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{GameState, GridState, RunPhase};
use crate::frame::{Style, TextFrame};
use crate::types::CellState;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the lane grid, HUD and overlays into a [`TextFrame`].
pub struct GameView {
    /// Lane cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per lane cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const BORDER: Style = Style::new(Color::Grey, Color::Reset);
const ROAD: Style = Style::new(Color::DarkGrey, Color::Reset);
const CAR: Style = Style::new(Color::Red, Color::Reset);
const PLAYER: Style = Style::new(Color::Cyan, Color::Reset).bold();
const CRASH: Style = Style::new(Color::Yellow, Color::DarkRed).bold();
const HUD: Style = Style::new(Color::White, Color::Reset);
const HINT: Style = Style::new(Color::DarkGrey, Color::Reset);
const OVERLAY: Style = Style::new(Color::Black, Color::White).bold();

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game into a framebuffer sized to the viewport.
    pub fn render(
        &self,
        grid: &GridState,
        game: &GameState,
        phase: RunPhase,
        best_score: i64,
        viewport: Viewport,
    ) -> TextFrame {
        let mut frame = TextFrame::new(viewport.width, viewport.height);

        let road_w = grid.columns() as u16 * self.cell_w;
        let road_h = grid.rows() as u16;
        let frame_w = road_w + 2;
        let frame_h = road_h + 2;

        // Board centered, leaving room for the HUD panel on its right.
        let total_w = frame_w + HUD_PANEL_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h);
        self.draw_road(&mut frame, grid, start_x + 1, start_y + 1);
        self.draw_hud(
            &mut frame,
            game,
            phase,
            best_score,
            start_x + frame_w + 2,
            start_y + 1,
        );
        self.draw_overlay(&mut frame, phase, start_x, start_y, frame_w, frame_h);

        frame.put_str(
            start_x,
            start_y + frame_h,
            "←/→ move  p pause  r restart  q quit",
            HINT,
        );

        frame
    }

    fn draw_road(&self, frame: &mut TextFrame, grid: &GridState, x0: u16, y0: u16) {
        for row in 0..grid.rows() {
            for (column, &cell) in grid.row(row).iter().enumerate() {
                let x = x0 + column as u16 * self.cell_w;
                let y = y0 + row as u16;
                let (pattern, style) = match cell {
                    CellState::Empty => ("· ", ROAD),
                    CellState::Car => ("▓▓", CAR),
                    CellState::Player => ("██", PLAYER),
                    CellState::Crash => ("✖✖", CRASH),
                };
                frame.put_str(x, y, pattern, style);
            }
        }
    }

    fn draw_hud(
        &self,
        frame: &mut TextFrame,
        game: &GameState,
        phase: RunPhase,
        best_score: i64,
        x: u16,
        y: u16,
    ) {
        frame.put_str(x, y, &format!("SCORE {}", game.score()), HUD);
        let hearts: String = std::iter::repeat('♥').take(game.lives() as usize).collect();
        frame.put_str(x, y + 1, &format!("LIVES {hearts}"), HUD);
        frame.put_str(x, y + 2, &format!("LEVEL {}", game.level()), HUD);
        frame.put_str(x, y + 3, &format!("BEST  {best_score}"), HUD);

        let state = match phase {
            RunPhase::Idle => "READY",
            RunPhase::Running => "",
            RunPhase::Paused(_) => "PAUSED",
            RunPhase::GameOver => "GAME OVER",
        };
        frame.put_str(x, y + 5, state, HUD);
    }

    fn draw_overlay(
        &self,
        frame: &mut TextFrame,
        phase: RunPhase,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let text = match phase {
            RunPhase::Paused(_) => "PAUSED",
            RunPhase::GameOver => "GAME OVER",
            RunPhase::Idle => "PRESS R",
            RunPhase::Running => return,
        };
        let text_x = x + w.saturating_sub(text.len() as u16) / 2;
        let text_y = y + h / 2;
        frame.put_str(text_x, text_y, text, OVERLAY);
    }

    fn draw_border(&self, frame: &mut TextFrame, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        frame.put(x, y, '┌', BORDER);
        frame.put(x + w - 1, y, '┐', BORDER);
        frame.put(x, y + h - 1, '└', BORDER);
        frame.put(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', BORDER);
            frame.put(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', BORDER);
            frame.put(x + w - 1, y + dy, '│', BORDER);
        }
    }
}

/// Columns reserved to the right of the board for the HUD panel.
const HUD_PANEL_W: u16 = 14;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameLoopController, ScriptedRandom, TimingCurve};

    fn test_controller() -> GameLoopController<ScriptedRandom, ()> {
        let config = GameConfig {
            rows: 4,
            columns: 3,
            starting_lives: 3,
            quiet_ticks: 0,
            curve: TimingCurve::fast(),
        };
        GameLoopController::new(config, ScriptedRandom::default(), ()).unwrap()
    }

    fn frame_text(frame: &TextFrame) -> String {
        (0..frame.height())
            .map(|y| frame.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn render_shows_player_and_hud() {
        let mut controller = test_controller();
        controller.start();

        let view = GameView::default();
        let frame = view.render(
            controller.grid(),
            controller.game(),
            controller.phase(),
            0,
            Viewport::new(60, 12),
        );

        let text = frame_text(&frame);
        assert!(text.contains("██"), "player glyph missing:\n{text}");
        assert!(text.contains("SCORE 0"), "HUD missing:\n{text}");
        assert!(text.contains("♥♥♥"), "lives missing:\n{text}");
        assert!(text.contains("LEVEL 1"), "level missing:\n{text}");
    }

    #[test]
    fn paused_game_shows_overlay() {
        let mut controller = test_controller();
        controller.start();
        controller.pause();

        let view = GameView::default();
        let frame = view.render(
            controller.grid(),
            controller.game(),
            controller.phase(),
            0,
            Viewport::new(60, 12),
        );
        assert!(frame_text(&frame).contains("PAUSED"));
    }

    #[test]
    fn idle_game_prompts_for_start() {
        let controller = test_controller();
        let view = GameView::default();
        let frame = view.render(
            controller.grid(),
            controller.game(),
            controller.phase(),
            0,
            Viewport::new(60, 12),
        );
        assert!(frame_text(&frame).contains("PRESS R"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut controller = test_controller();
        controller.start();
        let view = GameView::default();
        let frame = view.render(
            controller.grid(),
            controller.game(),
            controller.phase(),
            0,
            Viewport::new(3, 2),
        );
        assert_eq!(frame.width(), 3);
    }
}
