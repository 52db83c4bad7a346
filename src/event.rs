//! Notifications emitted by the table.
//!
//! The table never calls into presentation code. It queues [`TableEvent`]s
//! instead, and whoever renders the table drains them with
//! [`Table::drain_events`](crate::Table::drain_events).

use crate::card::Card;
use crate::game::Actions;
use crate::hand::Owner;
use crate::result::{Outcome, Scoreboard};

/// Something the presentation layer may want to show or play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A new round is about to be dealt. Both hands are empty.
    RoundStarted,
    /// The shoe was shuffled.
    ShuffleTriggered,
    /// A card landed in a hand.
    CardDealt {
        /// Whose hand received the card.
        owner: Owner,
        /// The card itself, or `None` while it lies face down.
        card: Option<Card>,
        /// Position of the card within the hand.
        position: usize,
        /// Whether the card is dealt face down.
        hidden: bool,
        /// Cards left in the draw pile.
        cards_remaining: usize,
    },
    /// The dealer's hole card was turned face up.
    HoleCardRevealed {
        /// The hole card.
        card: Card,
    },
    /// The displayed score of a hand changed.
    HandScoreChanged {
        /// Whose score changed.
        owner: Owner,
        /// The new displayed score.
        score: u8,
    },
    /// The set of available player actions changed.
    ActionsChanged(Actions),
    /// The round is over.
    RoundResolved {
        /// How the round ended.
        outcome: Outcome,
        /// Session totals after this round.
        scoreboard: Scoreboard,
    },
}
