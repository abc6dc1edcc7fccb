use std::fmt::{Debug, Formatter};

use tracing::debug;

use super::player_pool::{Player, PlayerDataQueue, PlayerQueue};
use super::tic_tac_toe::{self, Board, Glyphs, Outcome, Sign};
use super::{FinishedState, GameError, GameResult, GameState, PlayersError};

/// A player together with the sign they put on the board.
#[derive(Clone, Debug)]
pub struct Seat<P> {
    player: P,
    sign: Sign,
}

impl<P> Seat<P> {
    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }
}

impl<P: Player> Player for Seat<P> {
    type Id = P::Id;

    fn id(&self) -> Self::Id {
        self.player.id()
    }

    fn can_play(&self) -> bool {
        self.player.can_play()
    }
}

/// One match between two players.
///
/// The only way to change a session is [`GameSession::submit_move`]; once the
/// state is [`GameState::Finished`] the session never changes again.
pub struct GameSession<P: Player + Clone> {
    players: PlayerDataQueue<Seat<P>, P::Id>,
    state: GameState<P::Id>,
    board: Board,
}

impl<P> Debug for GameSession<P>
where
    P: Player + Clone + Debug,
    P::Id: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("players", &self.players.as_slice())
            .field("state", &self.state)
            .field("board", &self.board)
            .finish()
    }
}

impl<P> GameSession<P>
where
    P: Player + Clone,
    P::Id: Clone + Debug,
{
    /// Seats `first` as `X` and `second` as `O`, `first` moves first.
    pub fn new(first: P, second: P) -> GameResult<Self> {
        if first.id() == second.id() {
            return Err(PlayersError::Duplicate.into());
        }
        if let Some(player) = [&first, &second].into_iter().find(|p| !p.can_play()) {
            return Err(GameError::ineligible(format!("{:?}", player.id())));
        }
        let state = GameState::Turn(first.id());
        let seats = vec![
            Seat {
                player: first,
                sign: Sign::X,
            },
            Seat {
                player: second,
                sign: Sign::O,
            },
        ];
        Ok(Self {
            players: PlayerDataQueue::new(seats),
            state,
            board: Board::default(),
        })
    }

    /// Read-only snapshot for rendering.
    pub fn current_state(&self) -> (&Board, &GameState<P::Id>) {
        (&self.board, &self.state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState<P::Id> {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Both players in seating order.
    pub fn players(&self) -> impl Iterator<Item = &P> {
        self.players.as_slice().iter().map(Seat::player)
    }

    pub fn player(&self, id: &P::Id) -> Option<&P> {
        self.players.find(id).map(Seat::player)
    }

    pub fn seat_of_sign(&self, sign: Sign) -> GameResult<&Seat<P>> {
        self.players
            .find_if(|seat| seat.sign() == sign)
            .ok_or(GameError::PlayerPoolCorrupted)
    }

    /// Applies a move of `actor` and advances the turn.
    ///
    /// Any rejection leaves the session exactly as it was.
    pub fn submit_move(
        &mut self,
        row: usize,
        col: usize,
        actor: &P::Id,
    ) -> GameResult<GameState<P::Id>> {
        let current = match &self.state {
            GameState::Finished(_) => return Err(GameError::GameAlreadyOver),
            GameState::Turn(current) => current,
        };
        if current != actor {
            return Err(GameError::not_your_turn());
        }

        let sign = self
            .players
            .get_current()
            .ok_or(GameError::PlayerPoolCorrupted)?
            .sign();
        tic_tac_toe::apply_move(&mut self.board, row, col, sign)?;
        debug!(row, col, %sign, "move accepted");

        self.update_state()
    }

    pub fn render(&self, glyphs: &Glyphs) -> String {
        tic_tac_toe::render_grid(&self.board, glyphs)
    }

    fn update_state(&mut self) -> GameResult<GameState<P::Id>> {
        self.state = match tic_tac_toe::evaluate_outcome(&self.board) {
            Outcome::Unresolved => {
                let next = self
                    .players
                    .next()
                    .ok_or(GameError::PlayerPoolCorrupted)?
                    .id();
                GameState::Turn(next)
            }
            Outcome::WonBy(sign) => {
                GameState::Finished(FinishedState::Win(self.seat_of_sign(sign)?.id()))
            }
            Outcome::Draw => GameState::Finished(FinishedState::Draw),
        };
        Ok(self.state.clone())
    }
}
