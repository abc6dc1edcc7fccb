use std::iter::{Cycle, Peekable};
use std::marker::PhantomData;

use smallvec::{IntoIter, SmallVec};

/// Anything that can be seated at a board.
pub trait Player {
    type Id: PartialEq;

    fn id(&self) -> Self::Id;

    /// Whether this player may be seated in a game at all.
    fn can_play(&self) -> bool {
        true
    }
}

impl Player for u64 {
    type Id = u64;

    fn id(&self) -> Self::Id {
        *self
    }
}

pub trait PlayerQueue {
    type Id: PartialEq;
    type Item: Player<Id = Self::Id>;

    fn as_slice(&self) -> &[Self::Item];

    fn get_current(&mut self) -> Option<&Self::Item>;

    fn next(&mut self) -> Option<&Self::Item>;

    fn find(&self, id: &Self::Id) -> Option<&Self::Item> {
        self.as_slice().iter().find(|player| player.id() == *id)
    }

    fn find_if<F>(&self, f: F) -> Option<&Self::Item>
    where
        F: FnMut(&&Self::Item) -> bool,
    {
        self.as_slice().iter().find(f)
    }
}

type Seats<T> = SmallVec<[T; 2]>;

/// Cyclic queue of seated players, the head is whoever moves now.
#[derive(Debug)]
pub struct PlayerDataQueue<T: Clone, ID> {
    players: Seats<T>,
    players_queue: Peekable<Cycle<IntoIter<[T; 2]>>>,
    _phantom_data: PhantomData<ID>,
}

impl<T: Clone, ID> PlayerDataQueue<T, ID> {
    pub fn new(players: Vec<T>) -> Self {
        let players = Seats::from_vec(players);
        Self {
            players: players.clone(),
            players_queue: players.into_iter().cycle().peekable(),
            _phantom_data: PhantomData,
        }
    }
}

impl<T: Clone + Player<Id = ID>, ID: PartialEq> PlayerQueue for PlayerDataQueue<T, ID> {
    type Id = ID;
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.players.as_slice()
    }

    /// Get next element from pool without advancing iterator
    /// &mut self is needed because Peekable can call next() on the underlying iterator
    fn get_current(&mut self) -> Option<&T> {
        self.players_queue.peek()
    }

    /// Advance iterator by one and return the next element from the pool
    fn next(&mut self) -> Option<&T> {
        self.players_queue.next()?;
        self.players_queue.peek()
    }
}
