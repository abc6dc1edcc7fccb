use tokio::sync::mpsc::error::SendError;

use crate::game::GameError;

#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("control symbol `{symbol}` is bound to more than one cell")]
    DuplicateControl { symbol: String },
    #[error("control symbol `{symbol}` is empty or contains whitespace")]
    InvalidControl { symbol: String },
    #[error("{reply}")]
    Challenge { reply: String },
    #[error("failed to present the game: {reason}")]
    Presenter { reason: String },
    #[error("failed to send data over channel: {reason}")]
    ChannelSendFailed { reason: String },
    #[error(transparent)]
    GameError(#[from] GameError),
}

impl<T> From<SendError<T>> for HostError {
    fn from(value: SendError<T>) -> Self {
        Self::ChannelSendFailed {
            reason: value.to_string(),
        }
    }
}

impl HostError {
    pub fn presenter(reason: impl Into<String>) -> Self {
        Self::Presenter {
            reason: reason.into(),
        }
    }

    pub fn challenge(reply: impl Into<String>) -> Self {
        Self::Challenge {
            reply: reply.into(),
        }
    }
}
