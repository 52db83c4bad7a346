//! Hands and the hand evaluator.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Score above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Computes the best score of a hand.
///
/// Every card counts its base value, Aces counting 1. If the hand holds at
/// least one Ace and promoting a single Ace to 11 keeps the total at 21 or
/// below, the score is the raw sum plus 10. At most one Ace is ever promoted.
/// An empty hand scores 0.
///
/// ```
/// use bjtable::{Card, Rank, Suit};
/// use bjtable::hand::evaluate;
///
/// let hand = [Card::new(Suit::Spades, Rank::Ace), Card::new(Suit::Hearts, Rank::King)];
/// assert_eq!(evaluate(&hand), 21);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> u8 {
    let sum = cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.value()));
    let has_ace = cards.iter().any(Card::is_ace);

    if has_ace && sum <= BLACKJACK - 10 {
        sum + 10
    } else {
        sum
    }
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The house.
    Dealer,
    /// The single player at the table.
    Player,
}

/// An ordered run of dealt cards.
///
/// The dealer's second card is the hole card: it is dealt face down and stays
/// hidden until [`Hand::reveal_hole`]. The true score is always available
/// through [`Hand::value`]; [`Hand::visible_value`] is what a viewer may see.
#[derive(Debug, Clone)]
pub struct Hand {
    owner: Owner,
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Owner) -> Self {
        Self {
            owner,
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Returns the owner of the hand.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Appends a card in deal order.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the true value of the hand from every card.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the card at `position` is currently face down.
    #[must_use]
    pub fn is_hidden(&self, position: usize) -> bool {
        self.owner == Owner::Dealer && position == 1 && !self.hole_revealed
    }

    /// Returns whether the hole card has been turned over.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the hole card, if it has been dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        match self.owner {
            Owner::Dealer => self.cards.get(1).copied(),
            Owner::Player => None,
        }
    }

    /// Calculates the value a viewer may see.
    ///
    /// Before the reveal a dealer hand shows only the base value of its first
    /// card.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.owner == Owner::Dealer && !self.hole_revealed {
            self.cards.first().map_or(0, Card::value)
        } else {
            self.value()
        }
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
