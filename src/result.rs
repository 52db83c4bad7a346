//! Round outcomes and the session scoreboard.

use crate::hand::BLACKJACK;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player went over 21.
    DealerWinsByPlayerBust,
    /// The player beat the dealer with less than 21.
    PlayerWins,
    /// The player beat the dealer with exactly 21.
    PlayerBlackjack,
    /// Both hands scored the same.
    Draw,
    /// The dealer went over 21.
    DealerBustsPlayerWins,
    /// The dealer beat the player.
    DealerWins,
}

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
    /// Nobody.
    Nobody,
}

/// Sound cue a presentation layer plays for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player win.
    Win,
    /// Player loss.
    Lose,
    /// Player blackjack.
    Blackjack,
    /// Draw.
    Draw,
}

impl Outcome {
    /// Returns the side that takes the round.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::PlayerWins | Self::PlayerBlackjack | Self::DealerBustsPlayerWins => {
                Winner::Player
            }
            Self::DealerWinsByPlayerBust | Self::DealerWins => Winner::Dealer,
            Self::Draw => Winner::Nobody,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DealerWinsByPlayerBust => "Bust! The Dealer has won.",
            Self::PlayerWins => "You have won!",
            Self::PlayerBlackjack => "Blackjack!",
            Self::Draw => "Draw!",
            Self::DealerBustsPlayerWins => "The dealer busts. You have won!",
            Self::DealerWins => "The Dealer has won!",
        }
    }

    /// Returns the sound cue for the outcome.
    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::PlayerWins | Self::DealerBustsPlayerWins => Cue::Win,
            Self::PlayerBlackjack => Cue::Blackjack,
            Self::Draw => Cue::Draw,
            Self::DealerWinsByPlayerBust | Self::DealerWins => Cue::Lose,
        }
    }
}

/// Rounds won by each side during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    /// Credits the winner of `outcome`. A draw changes nothing.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Nobody => {}
        }
    }
}

/// Classifies a finished round from the two final scores.
///
/// A player bust always loses, even if the dealer also busts. A player 21
/// only counts as a blackjack when it beats the dealer; 21 against 21 is a
/// draw.
#[must_use]
pub const fn classify(player: u8, dealer: u8) -> Outcome {
    if player > BLACKJACK {
        Outcome::DealerWinsByPlayerBust
    } else if player > dealer {
        if player < BLACKJACK {
            Outcome::PlayerWins
        } else {
            Outcome::PlayerBlackjack
        }
    } else if player == dealer {
        Outcome::Draw
    } else if dealer > BLACKJACK {
        Outcome::DealerBustsPlayerWins
    } else {
        Outcome::DealerWins
    }
}

/// Classifies a finished round and credits the winner on `scoreboard`.
pub const fn resolve(player: u8, dealer: u8, scoreboard: &mut Scoreboard) -> Outcome {
    let outcome = classify(player, dealer);
    scoreboard.record(outcome);
    outcome
}
