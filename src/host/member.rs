use std::fmt::{Display, Formatter};

use crate::game::Player;

pub type UserId = u64;

/// A chat user that can be challenged to a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    id: UserId,
    name: String,
    bot: bool,
}

impl Member {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bot: false,
        }
    }

    pub fn bot(id: UserId, name: impl Into<String>) -> Self {
        Self {
            bot: true,
            ..Self::new(id, name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bot(&self) -> bool {
        self.bot
    }
}

impl Player for Member {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn can_play(&self) -> bool {
        !self.bot
    }
}

/// Mention text.
impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name())
    }
}
