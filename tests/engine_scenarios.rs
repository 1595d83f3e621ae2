//! Engine transition scenarios and invariants, driven through the public API.

use tui_dodger::core::{GridEngine, GridState, ScriptedRandom, SeededRandom};
use tui_dodger::types::{Action, CellState, Direction, Effect};

use CellState::{Car, Crash, Empty, Player};

fn scenario_grid(penultimate: [CellState; 3], player_column: usize) -> GridState {
    let mut player_row = vec![Empty; 3];
    player_row[player_column] = Player;
    GridState::from_rows(vec![
        vec![Empty; 3],
        vec![Empty; 3],
        vec![Empty; 3],
        penultimate.to_vec(),
        player_row,
    ])
    .unwrap()
}

#[test]
fn dodging_into_an_occupied_lane_crashes() {
    // Player center, cars in the two left lanes of the incoming row.
    let grid = scenario_grid([Car, Car, Empty], 1);
    let mut engine = GridEngine::new(ScriptedRandom::default());

    let (next, effects) = engine.next_grid(
        &grid,
        &[Action::MoveCar(Direction::Left), Action::Update],
    );

    assert_eq!(effects, vec![Effect::Crashed]);
    assert_eq!(next.player_row()[0], Crash);
    assert_eq!(next.player_column_index(), None);
    assert!(next.has_crashed());
}

#[test]
fn dodging_onto_an_open_lane_scores_the_passed_car() {
    let grid = scenario_grid([Empty, Car, Empty], 1);
    let mut engine = GridEngine::new(ScriptedRandom::default());

    let (next, effects) = engine.next_grid(
        &grid,
        &[Action::MoveCar(Direction::Right), Action::Update],
    );

    assert_eq!(effects, vec![Effect::Scored(1)]);
    assert!(!effects.contains(&Effect::Crashed));
    assert!(!next.has_crashed());
    assert_eq!(next.player_column_index(), Some(2));
}

#[test]
fn moves_clamp_at_both_road_edges() {
    let mut engine = GridEngine::new(ScriptedRandom::default());

    let grid = scenario_grid([Empty; 3], 0);
    let (next, _) = engine.next_grid(&grid, &[Action::MoveCar(Direction::Left)]);
    assert_eq!(next.player_column_index(), Some(0));

    let grid = scenario_grid([Empty; 3], 2);
    let (next, _) = engine.next_grid(&grid, &[Action::MoveCar(Direction::Right)]);
    assert_eq!(next.player_column_index(), Some(2));
}

#[test]
fn empty_action_list_returns_the_grid_unchanged() {
    let grid = scenario_grid([Car, Empty, Car], 1);
    let mut engine = GridEngine::new(SeededRandom::new(7));

    let (next, effects) = engine.next_grid(&grid, &[]);
    assert_eq!(next, grid);
    assert!(effects.is_empty());
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut a = GridEngine::new(SeededRandom::new(99));
    let mut b = GridEngine::new(SeededRandom::new(99));

    let mut grid_a = GridState::new(8, 5).unwrap();
    let mut grid_b = GridState::new(8, 5).unwrap();

    for step in 0..200 {
        let action = match step % 3 {
            0 => Action::MoveCar(Direction::Left),
            1 => Action::Update,
            _ => Action::MoveCar(Direction::Right),
        };
        let (next_a, effects_a) = a.next_grid(&grid_a, &[action]);
        let (next_b, effects_b) = b.next_grid(&grid_b, &[action]);
        assert_eq!(next_a, next_b);
        assert_eq!(effects_a, effects_b);

        grid_a = if next_a.has_crashed() {
            GridState::new(8, 5).unwrap()
        } else {
            next_a
        };
        grid_b = grid_a.clone();
    }
}

#[test]
fn playout_preserves_grid_invariants() {
    let mut engine = GridEngine::new(SeededRandom::new(2024));
    let mut grid = GridState::new(8, 5).unwrap();

    for step in 0..1000 {
        let action = match step % 4 {
            0 => Action::MoveCar(Direction::Left),
            2 => Action::MoveCar(Direction::Right),
            _ => Action::Update,
        };
        let (next, _) = engine.next_grid(&grid, &[action]);

        let crash_count = next
            .cells()
            .iter()
            .filter(|&&cell| cell == Crash)
            .count();
        let player_count = next
            .cells()
            .iter()
            .filter(|&&cell| cell == Player)
            .count();

        if next.has_crashed() {
            // The crash marker replaced the player token, exactly once, in
            // the player row.
            assert_eq!(crash_count, 1);
            assert_eq!(player_count, 0);
            assert!(next.player_row().contains(&Crash));
            grid = GridState::new(8, 5).unwrap();
            continue;
        }

        // Exactly one player token, on the player row; nothing above it but
        // traffic and open lanes.
        assert_eq!(player_count, 1);
        assert!(next.player_row().contains(&Player));
        for row in 0..next.rows() - 1 {
            assert!(next
                .row(row)
                .iter()
                .all(|&cell| cell == Empty || cell == Car));
        }

        // The open-lane guarantee holds for the freshly spawned row.
        if !matches!(action, Action::MoveCar(_)) {
            assert!(next.row(0).contains(&Empty));
        }

        grid = next;
    }
}

#[test]
fn saturated_traffic_still_leaves_an_open_lane() {
    // Script every spawn cell to be a car; the quota pass must always clear
    // at least one back out.
    let all_cars = std::iter::repeat(1u32).take(400).collect::<Vec<_>>();
    let mut engine = GridEngine::new(ScriptedRandom::new(all_cars));
    let mut grid = GridState::new(8, 5).unwrap();

    for _ in 0..20 {
        let (next, _) = engine.next_grid(&grid, &[Action::Update]);
        assert!(next.row(0).contains(&Empty));
        grid = if next.has_crashed() {
            GridState::new(8, 5).unwrap()
        } else {
            next
        };
    }
}
