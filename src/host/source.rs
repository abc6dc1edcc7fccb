use std::future::Future;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_stream::{Stream, StreamExt};

/// A raw input event: somebody used a control symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveEvent<Id> {
    pub player: Id,
    pub symbol: String,
}

impl<Id> MoveEvent<Id> {
    pub fn new(player: Id, symbol: impl Into<String>) -> Self {
        Self {
            player,
            symbol: symbol.into(),
        }
    }
}

/// Where a session host waits for input.
pub trait MoveSource<Id> {
    /// Waits for the next event, [`None`] once the input is closed for good.
    fn next_event(&mut self) -> impl Future<Output = Option<MoveEvent<Id>>> + Send;
}

/// Events pushed through an in-process channel.
#[derive(Debug)]
pub struct ChannelMoveSource<Id> {
    receiver: UnboundedReceiver<MoveEvent<Id>>,
}

impl<Id> ChannelMoveSource<Id> {
    pub fn new() -> (UnboundedSender<MoveEvent<Id>>, Self) {
        let (sender, receiver) = unbounded_channel();
        (sender, Self { receiver })
    }
}

impl<Id: Send> MoveSource<Id> for ChannelMoveSource<Id> {
    async fn next_event(&mut self) -> Option<MoveEvent<Id>> {
        self.receiver.recv().await
    }
}

/// Adapts any stream of events.
pub struct StreamMoveSource<S> {
    stream: S,
}

impl<S> StreamMoveSource<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<Id, S> MoveSource<Id> for StreamMoveSource<S>
where
    S: Stream<Item = MoveEvent<Id>> + Unpin + Send,
{
    async fn next_event(&mut self) -> Option<MoveEvent<Id>> {
        self.stream.next().await
    }
}
