//! Engine module - the grid transition function.
//!
//! [`GridEngine::next_grid`] is the single entry point: it takes the previous
//! grid plus a batch of actions and produces the next grid together with the
//! effects those actions caused. The engine holds no game state of its own;
//! its only external dependency is the injected [`RandomSource`], consulted
//! while spawning traffic rows and enforcing the open-lane guarantee.
//!
//! Actions fold left-to-right: the grid produced by one action is the input
//! to the next, and each action's effects are appended in order.
//!
//! A grid whose player token cannot be located (possible only if an
//! invariant was violated upstream, or after a collision marker replaced the
//! token) degrades fail-soft: the action is logged and skipped, never
//! panicking the host.

use tui_dodger_types::{
    Action, CellState, Direction, Effect, CAR_SPAWN_ODDS, MIN_OPEN_CELLS_PER_ROW,
};

use crate::grid::GridState;
use crate::rng::RandomSource;

/// Pure grid transition calculator.
pub struct GridEngine<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> GridEngine<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Compute the grid that follows `previous` under `actions`.
    ///
    /// `previous` is never mutated; the caller may keep it for diffing. An
    /// empty action list returns an identical grid and no effects.
    pub fn next_grid(&mut self, previous: &GridState, actions: &[Action]) -> (GridState, Vec<Effect>) {
        let mut grid = previous.clone();
        let mut effects = Vec::new();

        for &action in actions {
            match action {
                Action::MoveCar(direction) => self.apply_move(&mut grid, direction),
                Action::Update => {
                    let new_row = self.spawn_row(grid.columns());
                    self.apply_scroll(&mut grid, new_row, &mut effects);
                }
                Action::UpdateWithEmptyRow => {
                    let new_row = vec![CellState::Empty; grid.columns()];
                    self.apply_scroll(&mut grid, new_row, &mut effects);
                }
            }
        }

        (grid, effects)
    }

    /// Move the player one lane, clamped at the road edges.
    fn apply_move(&mut self, grid: &mut GridState, direction: Direction) {
        let Some(column) = grid.player_column_index() else {
            log::warn!("player token not found in player row; move ignored");
            return;
        };

        let target = match direction {
            Direction::Left => column.saturating_sub(1),
            Direction::Right => (column + 1).min(grid.columns() - 1),
        };

        let player_row = grid.player_row_index();
        grid.set(player_row, column, CellState::Empty);
        grid.set(player_row, target, CellState::Player);
    }

    /// Scroll the world one row toward the player, resolving the consumed
    /// row for collision or score.
    fn apply_scroll(
        &mut self,
        grid: &mut GridState,
        mut new_row: Vec<CellState>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(player_column) = grid.player_column_index() else {
            log::warn!("player token not found in player row; scroll ignored");
            return;
        };

        let penultimate = grid.penultimate_row_index();
        let crashed = grid.cell(penultimate, player_column) == Some(CellState::Car);
        if crashed {
            effects.push(Effect::Crashed);
        } else {
            let passed = grid
                .row(penultimate)
                .iter()
                .filter(|&&cell| cell == CellState::Car)
                .count() as u32;
            effects.push(Effect::Scored(passed));
        }

        self.ensure_open_lane(&mut new_row);
        grid.scroll_in(&new_row);

        if crashed {
            let player_row = grid.player_row_index();
            grid.set(player_row, player_column, CellState::Crash);
        }
    }

    /// Spawn one row of traffic: each lane independently holds a car with
    /// odds 1-in-`CAR_SPAWN_ODDS`.
    fn spawn_row(&mut self, columns: usize) -> Vec<CellState> {
        (0..columns)
            .map(|_| {
                if self.random.next_int(CAR_SPAWN_ODDS) == CAR_SPAWN_ODDS - 1 {
                    CellState::Car
                } else {
                    CellState::Empty
                }
            })
            .collect()
    }

    /// Clear uniformly random occupied cells until the row keeps at least
    /// `MIN_OPEN_CELLS_PER_ROW` empty lanes.
    ///
    /// An already fully empty row is a no-op, as is an unreachable quota on
    /// a degenerate row.
    fn ensure_open_lane(&mut self, row: &mut [CellState]) {
        let quota = MIN_OPEN_CELLS_PER_ROW.min(row.len());
        loop {
            let open = row.iter().filter(|&&cell| cell == CellState::Empty).count();
            if open >= quota {
                return;
            }

            let occupied: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, &cell)| cell != CellState::Empty)
                .map(|(idx, _)| idx)
                .collect();
            if occupied.is_empty() {
                return;
            }

            let pick = self.random.next_int(occupied.len() as u32) as usize;
            row[occupied[pick]] = CellState::Empty;
        }
    }
}
