use crate::error::ActionError;
use crate::hand::{BLACKJACK, Owner};
use crate::pacing::{Pacer, Pause};
use crate::shoe::Shoe;

use super::{RoundState, Step, Table};

impl<S: Shoe, P: Pacer> Table<S, P> {
    fn ensure_ready(&self, state: RoundState) -> Result<(), ActionError> {
        if self.action_in_progress || !self.steps.is_empty() {
            return Err(ActionError::ActionInProgress);
        }

        if self.state != state {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    fn reject(action: &str, err: ActionError) -> ActionError {
        log::debug!("ignored {action}: {err}");
        err
    }

    /// Opens the session: shuffles the shoe and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has already started.
    pub fn start(&mut self) -> Result<(), ActionError> {
        self.ensure_ready(RoundState::Setup)
            .map_err(|err| Self::reject("start", err))?;
        if self.rounds > 0 {
            return Err(Self::reject("start", ActionError::InvalidState));
        }

        self.then([
            Step::Pause(Pause::Settle),
            Step::Shuffle,
            Step::Pause(Pause::AfterShuffle),
            Step::BeginRound,
        ]);
        self.sync_actions();
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// The card is dealt by the next call to [`Table::step`]. Going over 21
    /// ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error, and changes nothing, if a deal is still in progress
    /// or it is not the player's turn.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        self.ensure_ready(RoundState::PlayerTurn)
            .map_err(|err| Self::reject("hit", err))?;

        self.action_in_progress = true;
        self.then([Step::Deal(Owner::Player), Step::AfterHit]);
        self.sync_actions();
        Ok(())
    }

    /// Player action: Stand (end the turn and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error, and changes nothing, if a deal is still in progress
    /// or it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_ready(RoundState::PlayerTurn)
            .map_err(|err| Self::reject("stand", err))?;

        self.begin_dealer_turn();
        self.sync_actions();
        Ok(())
    }

    /// Clears the table and deals the next round.
    ///
    /// Session scores are kept.
    ///
    /// # Errors
    ///
    /// Returns an error, and changes nothing, if the current round has not
    /// been resolved yet.
    pub fn play_again(&mut self) -> Result<(), ActionError> {
        self.ensure_ready(RoundState::Resolved)
            .map_err(|err| Self::reject("play again", err))?;

        self.state = RoundState::Setup;
        self.player_won = false;
        self.last_outcome = None;
        self.set_score(Owner::Player, 0);
        self.set_score(Owner::Dealer, 0);
        self.then([Step::BeginRound]);
        self.sync_actions();
        Ok(())
    }

    pub(super) fn after_hit(&mut self) {
        let score = self.player.value();
        self.set_score(Owner::Player, score);

        if score > BLACKJACK {
            log::info!("player bust with {score}");
            self.begin_dealer_turn();
            self.then([Step::Pause(Pause::BeforeResults)]);
        } else {
            self.then([Step::Pause(Pause::AfterHit)]);
        }
    }
}
