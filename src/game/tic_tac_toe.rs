use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;

use super::grid::{Grid, GridIndex};
use super::{BoardCell, MoveError};

/// Side length of the board.
pub const SIDE: usize = 3;

/// Mark placed on the board. The first seated player plays `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    X,
    O,
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::X => f.write_str("X"),
            Sign::O => f.write_str("O"),
        }
    }
}

pub type Cell = BoardCell<Sign>;

pub type Board = Grid<Cell, U3, U3>;

/// Result of looking at a board, independent of who is seated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unresolved,
    WonBy(Sign),
    Draw,
}

/// Text used for every cell state when rendering a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: String,
    pub x: String,
    pub o: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(":white_large_square:", ":regional_indicator_x:", ":o2:")
    }
}

impl Glyphs {
    pub fn new(empty: impl Into<String>, x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            empty: empty.into(),
            x: x.into(),
            o: o.into(),
        }
    }

    /// Single characters, readable on a terminal.
    pub fn plain() -> Self {
        Self::new(".", "X", "O")
    }

    pub fn glyph(&self, cell: Cell) -> &str {
        match *cell {
            None => &self.empty,
            Some(Sign::X) => &self.x,
            Some(Sign::O) => &self.o,
        }
    }
}

/// Puts `sign` into the cell at (`row`, `col`).
///
/// Exactly one cell changes on success. On error the board is left as it was.
pub fn apply_move(board: &mut Board, row: usize, col: usize, sign: Sign) -> Result<(), MoveError> {
    let cell = board
        .get_mut(GridIndex::new(row, col))
        .ok_or(MoveError::OutOfRange { row, col })?;
    if cell.is_some() {
        return Err(MoveError::CellIsOccupied { row, col });
    }
    *cell = sign.into();
    Ok(())
}

fn is_filled_with<'a>(mut cells: impl Iterator<Item = &'a Cell>, sign: Sign) -> bool {
    cells.all(|cell| **cell == Some(sign))
}

/// Returns `true` if `sign` occupies any row, column or diagonal completely.
pub fn has_line(board: &Board, sign: Sign) -> bool {
    let straight = (0..SIDE).any(|i| {
        is_filled_with(board.right_iter((i, 0).into()), sign)
            || is_filled_with(board.bottom_iter((0, i).into()), sign)
    });
    straight
        || is_filled_with(board.bottom_right_iter((0, 0).into()), sign)
        || is_filled_with(board.bottom_left_iter((0, SIDE - 1).into()), sign)
}

/// Wins are checked before fullness, so a move that both completes a line
/// and fills the board is a win.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if has_line(board, Sign::X) {
        return Outcome::WonBy(Sign::X);
    }
    if has_line(board, Sign::O) {
        return Outcome::WonBy(Sign::O);
    }
    if board.iter().flatten().all(|cell| cell.is_some()) {
        return Outcome::Draw;
    }
    Outcome::Unresolved
}

/// Row-major iterator over the empty cells.
pub fn free_cells(board: &Board) -> impl Iterator<Item = GridIndex> + '_ {
    board
        .all_indexed()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
}

pub fn render_grid(board: &Board, glyphs: &Glyphs) -> String {
    board
        .iter()
        .map(|row| row.iter().map(|cell| glyphs.glyph(*cell)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
