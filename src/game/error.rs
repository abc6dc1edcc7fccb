/// Why a single move was refused. The session is left untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside of the board")]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("other player's turn")]
    NotYourTurn,
}

/// Why a session couldn't be created.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlayersError {
    #[error("a player can't play against themselves")]
    Duplicate,
    #[error("player {player} is not allowed to play")]
    Ineligible { player: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("can't make a move on a finished game")]
    GameAlreadyOver,
    #[error("invalid players: {0}")]
    InvalidPlayers(#[from] PlayersError),
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn out_of_range(row: usize, col: usize) -> Self {
        MoveError::OutOfRange { row, col }.into()
    }

    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        MoveError::CellIsOccupied { row, col }.into()
    }

    pub fn not_your_turn() -> Self {
        MoveError::NotYourTurn.into()
    }

    pub fn ineligible(player: impl Into<String>) -> Self {
        PlayersError::Ineligible {
            player: player.into(),
        }
        .into()
    }

    /// Recoverable rejection of a single move, the game goes on.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Self::InvalidMove(_))
    }
}
