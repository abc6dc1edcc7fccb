use std::fmt::Debug;

use tracing::debug;

use super::error::HostError;
use super::HostResult;
use crate::game::{GameError, GameSession, Player};

pub const CHALLENGE_REPLY: &str = "Specify another player.";

/// Opens a game of `author` against `opponent`.
///
/// A missing opponent, a self-challenge or an opponent who can't play are
/// answered with [`CHALLENGE_REPLY`].
pub fn challenge<P>(author: P, opponent: Option<P>) -> HostResult<GameSession<P>>
where
    P: Player + Clone,
    P::Id: Clone + Debug,
{
    let Some(opponent) = opponent else {
        return Err(HostError::challenge(CHALLENGE_REPLY));
    };
    match GameSession::new(author, opponent) {
        Ok(session) => Ok(session),
        Err(GameError::InvalidPlayers(reason)) => {
            debug!(%reason, "challenge refused");
            Err(HostError::challenge(CHALLENGE_REPLY))
        }
        Err(err) => Err(err.into()),
    }
}
