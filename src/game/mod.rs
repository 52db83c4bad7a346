//! Round state machine.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;
use crate::event::TableEvent;
use crate::hand::{Hand, Owner};
use crate::options::TableOptions;
use crate::pacing::{InstantPacer, Pacer, Pause};
use crate::result::{Outcome, Scoreboard};
use crate::shoe::{CardShoe, Shoe};

mod actions;
mod deal;
mod dealer;
pub mod state;

use state::Step;
pub use state::{Actions, RoundState};

/// A single blackjack table: one dealer, one player, one shoe.
///
/// The table is a single cooperative flow. Player actions and
/// [`Table::start`] only schedule work; [`Table::step`] and
/// [`Table::run_until_idle`] carry it out, handing every presentation pause to
/// the table's [`Pacer`]. At most one deal is ever outstanding: whoever
/// schedules a deal sets the action guard and the dealing protocol clears it.
///
/// # Example
///
/// ```
/// use bjtable::{RoundState, Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::instant(), 7);
/// table.start().unwrap();
/// table.run_until_idle().unwrap();
/// assert_eq!(table.player_hand().len(), 2);
///
/// if table.state() == RoundState::PlayerTurn {
///     table.stand().unwrap();
///     table.run_until_idle().unwrap();
/// }
/// assert_eq!(table.state(), RoundState::Resolved);
/// ```
pub struct Table<S = CardShoe, P = InstantPacer> {
    shoe: S,
    pacer: P,
    options: TableOptions,
    state: RoundState,
    player: Hand,
    dealer: Hand,
    /// Scores as last displayed. The dealer policy and the resolver read
    /// these, never the hands directly.
    player_score: u8,
    dealer_score: u8,
    /// The action guard: set while a deal is outstanding.
    action_in_progress: bool,
    /// Player reached 21 on the opening deal.
    player_won: bool,
    scoreboard: Scoreboard,
    last_outcome: Option<Outcome>,
    rounds: u32,
    steps: VecDeque<Step>,
    events: Vec<TableEvent>,
    actions: Actions,
}

impl Table {
    /// Creates a table with a fresh shoe and no pauses between steps.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundState, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.state(), RoundState::Setup);
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = CardShoe::new(options.decks, seed);
        Self::with_parts(options, shoe, InstantPacer)
    }
}

impl<S: Shoe, P: Pacer> Table<S, P> {
    /// Creates a table around an existing shoe and pacer.
    #[must_use]
    pub fn with_parts(options: TableOptions, shoe: S, pacer: P) -> Self {
        Self {
            shoe,
            pacer,
            options,
            state: RoundState::Setup,
            player: Hand::new(Owner::Player),
            dealer: Hand::new(Owner::Dealer),
            player_score: 0,
            dealer_score: 0,
            action_in_progress: false,
            player_won: false,
            scoreboard: Scoreboard::new(),
            last_outcome: None,
            rounds: 0,
            steps: VecDeque::new(),
            events: Vec::new(),
            actions: Actions::NONE,
        }
    }

    /// Runs the next pending step.
    ///
    /// Returns `false` if nothing was pending.
    ///
    /// # Errors
    ///
    /// Returns an error if a card must be dealt while both the draw pile and
    /// the discard pile are empty. The table cannot recover from this.
    pub fn step(&mut self) -> Result<bool, DealError> {
        let Some(step) = self.steps.pop_front() else {
            return Ok(false);
        };

        match step {
            Step::Pause(pause) => self.pause(pause),
            Step::Shuffle => self.shuffle_shoe(),
            Step::BeginRound => self.begin_round(),
            Step::DealInitial(index) => self.deal_initial(index),
            Step::Deal(owner) => {
                self.deal_card(owner)?;
            }
            Step::AfterInitialCard(index) => self.after_initial_card(index),
            Step::FinishInitialDeal => self.finish_initial_deal(),
            Step::AfterHit => self.after_hit(),
            Step::RevealHole => self.reveal_hole(),
            Step::DealerDraw => self.dealer_draw(),
            Step::AfterDealerCard => self.after_dealer_card(),
            Step::Resolve => self.resolve_round(),
        }

        self.sync_actions();
        Ok(true)
    }

    /// Runs pending steps until the table waits for player input.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out of cards, see [`Table::step`].
    pub fn run_until_idle(&mut self) -> Result<(), DealError> {
        while self.step()? {}
        Ok(())
    }

    /// Returns whether no step is pending.
    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns whether a deal is outstanding.
    pub const fn is_action_in_progress(&self) -> bool {
        self.action_in_progress
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player actions accepted right now.
    pub const fn available_actions(&self) -> Actions {
        self.actions
    }

    /// Returns the player's displayed score.
    pub const fn current_player_score(&self) -> u8 {
        self.player_score
    }

    /// Returns the dealer's displayed score.
    ///
    /// While the hole card is hidden this covers the dealer's first card only.
    pub const fn current_dealer_score(&self) -> u8 {
        self.dealer_score
    }

    /// Returns the dealer's true score, hole card included.
    ///
    /// Before the reveal this is hidden information; show
    /// [`Table::current_dealer_score`] to the player instead.
    pub fn dealer_true_score(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the rounds won by each side this session.
    pub const fn cumulative_scores(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Returns the outcome of the last resolved round, until the next round
    /// starts.
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Returns the number of rounds started this session.
    pub const fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's cards as a viewer sees them.
    ///
    /// The hole card reads `None` until it is turned over.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::instant(), 7);
    /// table.start().unwrap();
    /// table.run_until_idle().unwrap();
    ///
    /// let cards: Vec<_> = table.dealer_cards().collect();
    /// assert_eq!(cards.len(), 2);
    /// assert!(cards[0].is_some());
    /// assert_eq!(cards[1].is_some(), table.is_hole_revealed());
    /// ```
    pub fn dealer_cards(&self) -> impl Iterator<Item = Option<Card>> + '_ {
        self.dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(position, card)| (!self.dealer.is_hidden(position)).then_some(*card))
    }

    /// Returns the number of cards in the dealer's hand, hole card included.
    pub fn dealer_card_count(&self) -> usize {
        self.dealer.len()
    }

    /// Returns whether the dealer's hole card has been turned over.
    pub const fn is_hole_revealed(&self) -> bool {
        self.dealer.is_hole_revealed()
    }

    /// Returns the number of cards left in the draw pile.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.draw_pile_size()
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &S {
        &self.shoe
    }

    /// Returns the pacer.
    pub const fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Takes every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        core::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: TableEvent) {
        self.events.push(event);
    }

    /// Queues `steps` ahead of everything already pending, in order.
    fn then<const N: usize>(&mut self, steps: [Step; N]) {
        for step in steps.into_iter().rev() {
            self.steps.push_front(step);
        }
    }

    fn pause(&mut self, pause: Pause) {
        let duration = match pause {
            Pause::Settle => self.options.settle,
            Pause::AfterShuffle => self.options.after_shuffle,
            Pause::BeforeDeal => self.options.before_deal,
            Pause::BeforeResults => self.options.before_results,
            Pause::AfterHit => self.options.after_hit,
        };
        self.pacer.pause(pause, duration);
    }

    fn set_score(&mut self, owner: Owner, score: u8) {
        match owner {
            Owner::Player => self.player_score = score,
            Owner::Dealer => self.dealer_score = score,
        }
        log::debug!("{owner:?} score now {score}");
        self.emit(TableEvent::HandScoreChanged { owner, score });
    }

    fn sync_actions(&mut self) {
        let ready = self.steps.is_empty() && !self.action_in_progress;
        let actions = Actions {
            hit: ready && self.state == RoundState::PlayerTurn,
            stand: ready && self.state == RoundState::PlayerTurn,
            play_again: ready && self.state == RoundState::Resolved,
            main_menu: ready && self.state == RoundState::Resolved,
        };

        if actions != self.actions {
            self.actions = actions;
            self.emit(TableEvent::ActionsChanged(actions));
        }
    }
}
