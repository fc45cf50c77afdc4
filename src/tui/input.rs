//! Keyboard and mouse mapping onto [`Action`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::{Action, App};
use crate::games::tictactoe::{Direction, Position};

/// Maps any terminal event to an action, if it means one.
pub fn event_action(app: &App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key, app.cursor(), app.game().is_over()),
        Event::Mouse(mouse) => mouse_action(app, mouse),
        _ => None,
    }
}

/// Maps a key press.
///
/// Arrows move the cursor, Enter/Space play it, `1`-`9` play a cell
/// directly, `r` is Play Again (only once the game is over), `q`/Esc quit.
pub fn key_action(key: KeyEvent, cursor: Position, game_over: bool) -> Option<Action> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Play(cursor)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Position::from_index(index).map(Action::Play)
        }
        KeyCode::Char('r') | KeyCode::Char('R') if game_over => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left-button press through the board's hit areas.
pub fn mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.action_at(mouse.column, mouse.row),
        _ => None,
    }
}
