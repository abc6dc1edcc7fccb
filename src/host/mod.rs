//! Everything around a [`GameSession`](crate::game::GameSession) that touches the outside
//! world: input symbols, waiting for moves, timeouts and presentation.

pub mod challenge;
pub mod controls;
pub mod member;
pub mod runner;
pub mod source;

mod error;

pub use challenge::challenge;
pub use controls::ReactionControls;
pub use error::HostError;
pub use member::Member;
pub use runner::{Frame, Presenter, SessionEnd, SessionRunner};
pub use source::{ChannelMoveSource, MoveEvent, MoveSource, StreamMoveSource};

pub type HostResult<T> = Result<T, HostError>;
