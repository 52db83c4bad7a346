use crate::card::Card;
use crate::error::DealError;
use crate::event::TableEvent;
use crate::hand::{BLACKJACK, Owner};
use crate::pacing::{Pacer, Pause};
use crate::shoe::Shoe;

use super::{RoundState, Step, Table};

/// Cards dealt before the player acts.
const OPENING_CARDS: u8 = 4;

impl<S: Shoe, P: Pacer> Table<S, P> {
    /// Opening shuffle of a session.
    pub(super) fn shuffle_shoe(&mut self) {
        self.shoe.shuffle_draw_pile();
        log::info!("shoe shuffled, {} cards", self.shoe.draw_pile_size());
        self.emit(TableEvent::ShuffleTriggered);
    }

    /// Folds the discard pile back into an empty draw pile.
    ///
    /// Returns `true` if a shuffle happened.
    fn check_for_shuffle(&mut self) -> bool {
        if self.shoe.draw_pile_size() > 0 || self.shoe.discard_pile_size() == 0 {
            return false;
        }

        self.shoe.shuffle_together();
        log::info!(
            "draw pile empty, reshuffled discards into {} cards",
            self.shoe.draw_pile_size()
        );
        self.emit(TableEvent::ShuffleTriggered);
        true
    }

    pub(super) fn begin_round(&mut self) {
        self.rounds += 1;
        self.state = RoundState::DealingInitial;
        self.action_in_progress = false;
        self.player_won = false;
        self.last_outcome = None;

        if self.shoe.in_use_pile_size() > 0 {
            self.shoe.move_all_in_use_to_discard();
        }

        self.player.clear();
        self.dealer.clear();
        log::info!("round {} started", self.rounds);
        self.emit(TableEvent::RoundStarted);

        if self.check_for_shuffle() {
            self.then([Step::Pause(Pause::AfterShuffle), Step::DealInitial(0)]);
        } else {
            self.then([Step::DealInitial(0)]);
        }
    }

    /// Opening cards alternate dealer, player, dealer, player.
    pub(super) fn deal_initial(&mut self, index: u8) {
        let owner = if index % 2 == 0 {
            Owner::Dealer
        } else {
            Owner::Player
        };

        self.action_in_progress = true;
        self.then([Step::Deal(owner), Step::AfterInitialCard(index)]);
    }

    /// Deals one card into `owner`'s hand.
    ///
    /// The caller sets the action guard before scheduling the deal; this
    /// clears it once the card is in the hand. An empty draw pile is refilled
    /// from the discards first.
    pub(super) fn deal_card(&mut self, owner: Owner) -> Result<Card, DealError> {
        if self.check_for_shuffle() {
            self.pause(Pause::AfterShuffle);
        }

        let card = self
            .shoe
            .move_top_card_to_in_use()
            .ok_or(DealError::ShoeExhausted)?;

        let hand = match owner {
            Owner::Player => &mut self.player,
            Owner::Dealer => &mut self.dealer,
        };
        hand.add_card(card);
        let position = hand.len() - 1;
        let hidden = hand.is_hidden(position);

        if hidden {
            log::debug!("dealt hole card to {owner:?}");
        } else {
            log::debug!("dealt {card} to {owner:?}");
        }
        self.emit(TableEvent::CardDealt {
            owner,
            card: (!hidden).then_some(card),
            position,
            hidden,
            cards_remaining: self.shoe.draw_pile_size(),
        });

        self.action_in_progress = false;
        Ok(card)
    }

    pub(super) fn after_initial_card(&mut self, index: u8) {
        if index % 2 == 0 {
            // Only the up card counts while the hole card is face down.
            if index == 0 {
                let score = self.dealer.visible_value();
                self.set_score(Owner::Dealer, score);
            }
        } else {
            let score = self.player.value();
            self.set_score(Owner::Player, score);
            if score == BLACKJACK {
                self.player_won = true;
            }
        }

        if index + 1 < OPENING_CARDS {
            self.then([Step::Pause(Pause::BeforeDeal), Step::DealInitial(index + 1)]);
        } else {
            self.then([Step::Pause(Pause::BeforeDeal), Step::FinishInitialDeal]);
        }
    }

    pub(super) fn finish_initial_deal(&mut self) {
        if self.player_won {
            log::info!("player dealt {BLACKJACK}, standing automatically");
            self.begin_dealer_turn();
        } else {
            self.state = RoundState::PlayerTurn;
        }
    }
}
