use crate::game::tic_tac_toe::SIDE;
use crate::game::GridIndex;

use super::error::HostError;
use super::HostResult;

const CELLS: usize = SIDE * SIDE;

/// Arrow emoji laid out like the board, read row by row.
const ARROWS: [&str; CELLS] = [
    "\u{2196}", "\u{2B06}", "\u{2197}", // top row
    "\u{2B05}", "\u{23FA}", "\u{27A1}", // middle row
    "\u{2199}", "\u{2B07}", "\u{2198}", // bottom row
];

/// Digits as they sit on a numeric keypad.
const KEYPAD: [&str; CELLS] = ["7", "8", "9", "4", "5", "6", "1", "2", "3"];

/// One input symbol per board cell and one cell per symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionControls {
    symbols: [String; CELLS],
}

impl Default for ReactionControls {
    fn default() -> Self {
        Self {
            symbols: ARROWS.map(String::from),
        }
    }
}

impl ReactionControls {
    /// Binds `symbols` to the cells in row-major order.
    ///
    /// Every symbol must be a single non-empty word, hosts read input split on whitespace.
    pub fn new<S: Into<String>>(symbols: [S; CELLS]) -> HostResult<Self> {
        let symbols: [String; CELLS] = symbols.map(Into::into);
        for (i, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                return Err(HostError::InvalidControl {
                    symbol: symbol.clone(),
                });
            }
            if symbols[..i].contains(symbol) {
                return Err(HostError::DuplicateControl {
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(Self { symbols })
    }

    pub fn keypad() -> Self {
        Self {
            symbols: KEYPAD.map(String::from),
        }
    }

    /// Cell bound to `symbol`, if any.
    pub fn position(&self, symbol: &str) -> Option<GridIndex> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| GridIndex::new(i / SIDE, i % SIDE))
    }

    pub fn symbol(&self, index: GridIndex) -> Option<&str> {
        if index.row() >= SIDE || index.col() >= SIDE {
            return None;
        }
        self.symbols
            .get(index.row_major(SIDE))
            .map(String::as_str)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}
