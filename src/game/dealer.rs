use crate::event::TableEvent;
use crate::hand::{BLACKJACK, Owner};
use crate::pacing::{Pacer, Pause};
use crate::result::resolve;
use crate::shoe::Shoe;

use super::{RoundState, Step, Table};

impl<S: Shoe, P: Pacer> Table<S, P> {
    /// Ends the player's turn. The dealer reveals, then plays out.
    pub(super) fn begin_dealer_turn(&mut self) {
        self.state = RoundState::DealerTurn;
        self.then([
            Step::RevealHole,
            Step::Pause(Pause::BeforeResults),
            Step::DealerDraw,
        ]);
    }

    pub(super) fn reveal_hole(&mut self) {
        self.dealer.reveal_hole();
        if let Some(card) = self.dealer.hole_card() {
            log::debug!("dealer reveals {card}");
            self.emit(TableEvent::HoleCardRevealed { card });
        }

        let score = self.dealer.value();
        self.set_score(Owner::Dealer, score);
    }

    /// Draws for the dealer while they are below the stand score.
    ///
    /// A busted player ends the round without further dealer cards.
    pub(super) fn dealer_draw(&mut self) {
        if self.player_score <= BLACKJACK && self.dealer_score < self.options.dealer_stands_at {
            self.action_in_progress = true;
            self.then([Step::Deal(Owner::Dealer), Step::AfterDealerCard]);
        } else {
            self.then([Step::Resolve]);
        }
    }

    pub(super) fn after_dealer_card(&mut self) {
        let score = self.dealer.value();
        self.set_score(Owner::Dealer, score);
        self.then([Step::Pause(Pause::BeforeDeal), Step::DealerDraw]);
    }

    pub(super) fn resolve_round(&mut self) {
        let outcome = resolve(self.player_score, self.dealer_score, &mut self.scoreboard);
        self.state = RoundState::Resolved;
        self.last_outcome = Some(outcome);

        log::info!(
            "round {} over: {outcome:?} ({} vs {}), player {} dealer {}",
            self.rounds,
            self.player_score,
            self.dealer_score,
            self.scoreboard.player_wins,
            self.scoreboard.dealer_wins
        );
        self.emit(TableEvent::RoundResolved {
            outcome,
            scoreboard: self.scoreboard,
        });
    }
}
