use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::game::tic_tac_toe::Glyphs;
use crate::host::ReactionControls;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ControlSet {
    /// Arrow emoji, the same ones a chat host puts under the game message
    Arrows,
    /// Digits laid out like a numeric keypad
    Keypad,
}

impl From<ControlSet> for ReactionControls {
    fn from(value: ControlSet) -> Self {
        match value {
            ControlSet::Arrows => ReactionControls::default(),
            ControlSet::Keypad => ReactionControls::keypad(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GlyphSet {
    /// Chat emoji shortcodes
    Emoji,
    /// `.`, `X` and `O`
    Plain,
}

impl From<GlyphSet> for Glyphs {
    fn from(value: GlyphSet) -> Self {
        match value {
            GlyphSet::Emoji => Glyphs::default(),
            GlyphSet::Plain => Glyphs::plain(),
        }
    }
}

/// Play a game of tic-tac-toe between two local players
#[derive(Parser, Clone, Debug)]
#[command(name = "ttt", version, long_about = None)]
pub struct Settings {
    /// Name of the player who moves first (X)
    #[arg(long, env = "TTT_PLAYER_A", default_value = "alice")]
    pub player_a: String,

    /// Name of the player who moves second (O)
    #[arg(long, env = "TTT_PLAYER_B", default_value = "bob")]
    pub player_b: String,

    /// Seconds to wait for a valid move before the game is abandoned
    #[arg(long, env = "TTT_TURN_TIMEOUT_SECS", default_value_t = 60 * 60 * 24)]
    pub turn_timeout_secs: u64,

    /// Symbols used to pick a cell
    #[arg(long, value_enum, env = "TTT_CONTROLS", default_value_t = ControlSet::Keypad)]
    pub controls: ControlSet,

    /// How cells are drawn
    #[arg(long, value_enum, env = "TTT_GLYPHS", default_value_t = GlyphSet::Plain)]
    pub glyphs: GlyphSet,
}

impl Settings {
    pub fn turn_timeout(&self) -> Duration {
        Duration::from_secs(self.turn_timeout_secs)
    }
}
