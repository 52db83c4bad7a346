//! Round state types.

use crate::hand::Owner;
use crate::pacing::Pause;

/// Where the current round stands.
///
/// A round moves strictly forward through these states; only
/// [`Table::play_again`](crate::Table::play_again) cycles back to `Setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Hands are being cleared for a new round.
    Setup,
    /// The opening four cards are being dealt.
    DealingInitial,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer reveals and plays out their hand.
    DealerTurn,
    /// The outcome is known.
    Resolved,
}

/// Player-facing actions that are currently accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    /// Take another card.
    pub hit: bool,
    /// End the player's turn.
    pub stand: bool,
    /// Deal the next round.
    pub play_again: bool,
    /// Leave the table.
    pub main_menu: bool,
}

impl Actions {
    /// No action available.
    pub const NONE: Self = Self {
        hit: false,
        stand: false,
        play_again: false,
        main_menu: false,
    };
}

/// One unit of work in the table's cooperative flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Pause(Pause),
    /// Opening shuffle of the full shoe.
    Shuffle,
    BeginRound,
    /// Schedules the n-th opening card, dealer first.
    DealInitial(u8),
    /// Runs the dealing protocol. The guard must already be set.
    Deal(Owner),
    AfterInitialCard(u8),
    FinishInitialDeal,
    AfterHit,
    RevealHole,
    DealerDraw,
    AfterDealerCard,
    Resolve,
}
