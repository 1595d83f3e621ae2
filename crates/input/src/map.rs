//! Key mapping from terminal events to player commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::PlayerCommand;

/// Map keyboard input to a player command.
pub fn command_for_key(key: KeyEvent) -> Option<PlayerCommand> {
    match key.code {
        // Lane changes
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(PlayerCommand::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(PlayerCommand::MoveRight),

        // Lifecycle
        KeyCode::Char('p') | KeyCode::Char('P') => Some(PlayerCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
