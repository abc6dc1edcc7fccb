use std::fmt::{Debug, Display};
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::controls::ReactionControls;
use super::source::MoveSource;
use super::HostResult;
use crate::game::tic_tac_toe::{self, Glyphs};
use crate::game::{FinishedState, GameSession, GameState, Player};

/// How long a session waits for a single move before it's abandoned.
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24);

pub const TITLE: &str = "Tic-Tac-Toe!";

/// Everything a host needs to show one state of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub title: String,
    pub description: String,
    pub grid: String,
    /// Symbols of the cells that are still free, empty once the game is over.
    pub controls: Vec<String>,
}

impl Frame {
    pub fn of<P>(session: &GameSession<P>, controls: &ReactionControls, glyphs: &Glyphs) -> Self
    where
        P: Player + Clone + Display,
        P::Id: Clone + Debug,
    {
        let name_of = |id: &P::Id| {
            session
                .player(id)
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("{:?}", id))
        };
        let versus = session
            .players()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" vs. ");
        let (board, state) = session.current_state();
        let (status, free) = match state {
            GameState::Turn(id) => (
                format!("{}'s turn!", name_of(id)),
                tic_tac_toe::free_cells(board)
                    .filter_map(|index| controls.symbol(index))
                    .map(String::from)
                    .collect(),
            ),
            GameState::Finished(FinishedState::Win(id)) => {
                (format!("{} has won!", name_of(id)), Vec::new())
            }
            GameState::Finished(FinishedState::Draw) => ("It's a draw!".to_string(), Vec::new()),
        };

        Self {
            title: TITLE.to_string(),
            description: format!("{}\n{}", versus, status),
            grid: tic_tac_toe::render_grid(board, glyphs),
            controls: free,
        }
    }
}

/// Shows frames to the players.
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> impl Future<Output = HostResult<()>> + Send;
}

/// Forwards frames to whatever task owns the real output.
#[derive(Debug)]
pub struct ChannelPresenter {
    sender: UnboundedSender<Frame>,
}

impl ChannelPresenter {
    pub fn new(sender: UnboundedSender<Frame>) -> Self {
        Self { sender }
    }
}

impl Presenter for ChannelPresenter {
    async fn present(&mut self, frame: &Frame) -> HostResult<()> {
        self.sender.send(frame.clone())?;
        Ok(())
    }
}

/// Why [`SessionRunner::run`] returned.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEnd<Id> {
    Finished(FinishedState<Id>),
    /// Nobody made a valid move within the turn timeout.
    TimedOut,
    SourceClosed,
    Cancelled,
}

/// Drives one session: present, wait for a move, apply it, present again.
pub struct SessionRunner<P: Player + Clone, S, R> {
    session: GameSession<P>,
    source: S,
    presenter: R,
    controls: ReactionControls,
    glyphs: Glyphs,
    turn_timeout: Duration,
    cancel: CancellationToken,
}

impl<P, S, R> SessionRunner<P, S, R>
where
    P: Player + Clone + Display,
    P::Id: Clone + Debug,
    S: MoveSource<P::Id>,
    R: Presenter,
{
    pub fn new(session: GameSession<P>, source: S, presenter: R) -> Self {
        Self {
            session,
            source,
            presenter,
            controls: ReactionControls::default(),
            glyphs: Glyphs::default(),
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_controls(mut self, controls: ReactionControls) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_turn_timeout(mut self, turn_timeout: Duration) -> Self {
        self.turn_timeout = turn_timeout;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn session(&self) -> &GameSession<P> {
        &self.session
    }

    pub fn into_session(self) -> GameSession<P> {
        self.session
    }

    pub fn frame(&self) -> Frame {
        Frame::of(&self.session, &self.controls, &self.glyphs)
    }

    pub async fn run(&mut self) -> HostResult<SessionEnd<P::Id>> {
        info!("session started");
        self.presenter.present(&self.frame()).await?;

        loop {
            if let GameState::Finished(finished) = self.session.state() {
                info!(result = ?finished, "session finished");
                return Ok(SessionEnd::Finished(finished.clone()));
            }

            let waited = tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("session cancelled");
                    return Ok(SessionEnd::Cancelled);
                }
                waited = timeout(
                    self.turn_timeout,
                    Self::next_accepted_move(&mut self.session, &mut self.source, &self.controls),
                ) => waited,
            };

            match waited {
                Ok(Ok(true)) => self.presenter.present(&self.frame()).await?,
                Ok(Ok(false)) => {
                    info!("move source closed");
                    return Ok(SessionEnd::SourceClosed);
                }
                Ok(Err(err)) => return Err(err),
                Err(_) => {
                    warn!(timeout = ?self.turn_timeout, "no move in time, abandoning session");
                    return Ok(SessionEnd::TimedOut);
                }
            }
        }
    }

    /// Reads events until one of them is accepted by the session.
    /// Returns `false` if the source closed first.
    async fn next_accepted_move(
        session: &mut GameSession<P>,
        source: &mut S,
        controls: &ReactionControls,
    ) -> HostResult<bool> {
        while let Some(event) = source.next_event().await {
            let Some(index) = controls.position(&event.symbol) else {
                trace!(symbol = %event.symbol, "ignoring unknown control");
                continue;
            };
            match session.submit_move(index.row(), index.col(), &event.player) {
                Ok(_) => return Ok(true),
                Err(err) if err.is_invalid_move() => {
                    debug!(player = ?event.player, cell = %index, %err, "move rejected");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(false)
    }
}
