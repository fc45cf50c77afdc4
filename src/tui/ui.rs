//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use super::app::App;
use super::layout::BoardLayout;
use crate::games::tictactoe::GameStatus;

const HELP: &str = "arrows move · enter/1-9 play · r play again · q quit";

/// Renders the status line, the nine cells, Play Again once the game is
/// over, and confetti on top while celebrating.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = BoardLayout::new(area);
    let game = app.game();
    let status = game.status();

    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::InProgress(_) => Style::default().fg(Color::Cyan),
    };
    frame.render_widget(
        Paragraph::new(status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        layout.status,
    );

    for (cell, rect) in app.cells().into_iter().zip(layout.cells) {
        frame.render_widget(cell, rect);
    }

    if game.is_over() {
        let button = Paragraph::new("Play Again")
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::Green)));
        frame.render_widget(button, layout.play_again);
    }

    frame.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout.help,
    );

    if let Some(confetti) = app.confetti() {
        frame.render_widget(confetti, area);
    }
}
