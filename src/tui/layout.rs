//! Board geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Position as ScreenPosition, Rect};

use crate::games::tictactoe::Position;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = 3 * CELL_WIDTH + 2 * GAP;
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + 2 * GAP;
const BUTTON_WIDTH: u16 = 14;
const BUTTON_HEIGHT: u16 = 3;

// status, gap, board, gap, button, gap, help
const BOARD_TOP: u16 = 2;
const BUTTON_TOP: u16 = BOARD_TOP + BOARD_HEIGHT + 1;
const HELP_TOP: u16 = BUTTON_TOP + BUTTON_HEIGHT + 1;
const TOTAL_HEIGHT: u16 = HELP_TOP + 1;

/// Screen rectangles for every part of the board, centred in a viewport.
///
/// Parts that fall outside a too-small viewport are clipped to zero size and
/// can never be hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// The status line.
    pub status: Rect,
    /// The nine cells, in board index order.
    pub cells: [Rect; 9],
    /// The "Play Again" control.
    pub play_again: Rect,
    /// The key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Lays the board out in `area`.
    pub fn new(area: Rect) -> Self {
        let origin = center_rect(area, BOARD_WIDTH, TOTAL_HEIGHT);
        let at = |dx: u16, dy: u16, width: u16, height: u16| {
            Rect::new(
                origin.x.saturating_add(dx),
                origin.y.saturating_add(dy),
                width,
                height,
            )
            .intersection(area)
        };

        let cells = std::array::from_fn(|i| {
            let pos = Position::ALL[i];
            at(
                pos.col() as u16 * (CELL_WIDTH + GAP),
                BOARD_TOP + pos.row() as u16 * (CELL_HEIGHT + GAP),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
        });

        Self {
            status: at(0, 0, BOARD_WIDTH, 1),
            cells,
            play_again: at(
                (BOARD_WIDTH - BUTTON_WIDTH) / 2,
                BUTTON_TOP,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            help: Rect::new(area.x, origin.y.saturating_add(HELP_TOP), area.width, 1)
                .intersection(area),
        }
    }

    /// Returns the cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Returns true if a screen coordinate lies on the Play Again control.
    pub fn play_again_contains(&self, column: u16, row: u16) -> bool {
        self.play_again.contains(ScreenPosition::new(column, row))
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}
