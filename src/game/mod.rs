pub mod grid;
pub mod player_pool;
pub mod session;
pub mod tic_tac_toe;

mod error;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use error::{GameError, MoveError, PlayersError};
pub use grid::GridIndex;
pub use player_pool::Player;
pub use session::GameSession;

pub type GameResult<T> = Result<T, GameError>;

/// A board cell holding the [`Sign`](tic_tac_toe::Sign) placed on it, empty when it holds [`None`].
///
/// Derefs to the inner [`Option`] so line checks compare cells directly against `Some(sign)`.
/// [`Display`] gives the bracketed debug view used when logging a board, e.g. `[X]` or `[ ]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishedState<Id> {
    Win(Id),
    Draw,
}

/// Where a session is in its turn protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState<Id> {
    /// Waiting for a move of the given player.
    Turn(Id),
    /// Terminal, no more moves are accepted.
    Finished(FinishedState<Id>),
}

impl<Id> GameState<Id> {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    pub fn current_player(&self) -> Option<&Id> {
        match self {
            GameState::Turn(id) => Some(id),
            GameState::Finished(_) => None,
        }
    }
}
