//! Stateless cell widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::app::Action;
use crate::games::tictactoe::{Player, Square};

/// One clickable board cell: shows a mark and names the action it fires.
///
/// The cell does no validation; whatever it emits goes to
/// [`App::dispatch`](super::App::dispatch), which decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Square,
    focused: bool,
    on_activate: Action,
}

impl Cell {
    /// Creates a cell showing `value` that emits `on_activate` when clicked.
    pub fn new(value: Square, on_activate: Action) -> Self {
        Self {
            value,
            focused: false,
            on_activate,
        }
    }

    /// Highlights the cell as the keyboard cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Returns the displayed value.
    pub fn value(&self) -> Square {
        self.value
    }

    /// Activates the cell.
    pub fn activate(&self) -> Action {
        self.on_activate
    }
}

impl Widget for Cell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mark_style = match self.value {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        };

        let (mark_style, border_style) = if self.focused {
            (
                mark_style.bg(Color::White).fg(Color::Black),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            (mark_style, Style::default().fg(Color::DarkGray))
        };

        let symbol = format!(" {} ", self.value.symbol());
        Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border_style))
            .render(area, buf);
    }
}
