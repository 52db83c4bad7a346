//! The card supply consumed by the table.
//!
//! A shoe keeps three piles: the draw pile cards are dealt from, the in-use
//! pile holding cards currently sitting in a hand, and the discard pile that
//! finished rounds are swept into. The table only talks to the [`Shoe`]
//! trait; [`CardShoe`] is the stock implementation.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Pile operations the table needs from a card supply.
pub trait Shoe {
    /// Number of cards left in the draw pile.
    fn draw_pile_size(&self) -> usize;

    /// Number of cards in the discard pile.
    fn discard_pile_size(&self) -> usize;

    /// Number of cards currently dealt into hands.
    fn in_use_pile_size(&self) -> usize;

    /// Randomizes the order of the draw pile.
    fn shuffle_draw_pile(&mut self);

    /// Moves every discarded card into the draw pile and shuffles it.
    ///
    /// The discard pile is empty afterwards.
    fn shuffle_together(&mut self);

    /// Takes the top card of the draw pile and tracks it as in use.
    ///
    /// Returns `None` if the draw pile is empty.
    fn move_top_card_to_in_use(&mut self) -> Option<Card>;

    /// Sweeps every in-use card into the discard pile.
    fn move_all_in_use_to_discard(&mut self);
}

/// A shoe of standard 52-card decks backed by a seeded RNG.
#[derive(Debug, Clone)]
pub struct CardShoe {
    /// Top of the pile is the last element.
    draw: Vec<Card>,
    discard: Vec<Card>,
    in_use: Vec<Card>,
    rng: ChaCha8Rng,
    /// Set for stacked shoes: shuffles never reorder the cards.
    preserve_order: bool,
}

impl CardShoe {
    /// Creates an unshuffled shoe holding `decks` standard decks.
    ///
    /// The table shuffles the shoe when a session starts.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut draw = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    draw.push(Card::new(suit, rank));
                }
            }
        }
        // Deck order reads top-down, the pile pops from the back.
        draw.reverse();

        Self {
            draw,
            discard: Vec::new(),
            in_use: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            preserve_order: false,
        }
    }

    /// Creates a shoe whose draw pile yields `order` front to back.
    ///
    /// A stacked shoe keeps its order through every shuffle, so a table
    /// deals it exactly as given. Discards folded back in by a reshuffle are
    /// drawn after the rest of the pile, in the order they were discarded.
    #[must_use]
    pub fn stacked(order: &[Card], seed: u64) -> Self {
        let mut draw = order.to_vec();
        draw.reverse();

        Self {
            draw,
            discard: Vec::new(),
            in_use: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            preserve_order: true,
        }
    }

    /// Replaces the discard pile.
    #[must_use]
    pub fn with_discard(mut self, discard: &[Card]) -> Self {
        self.discard = discard.to_vec();
        self
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
}

impl Shoe for CardShoe {
    fn draw_pile_size(&self) -> usize {
        self.draw.len()
    }

    fn discard_pile_size(&self) -> usize {
        self.discard.len()
    }

    fn in_use_pile_size(&self) -> usize {
        self.in_use.len()
    }

    fn shuffle_draw_pile(&mut self) {
        if !self.preserve_order {
            self.draw.shuffle(&mut self.rng);
        }
    }

    fn shuffle_together(&mut self) {
        if self.preserve_order {
            // The bottom of the pile is the front of the vec.
            let mut pile = core::mem::take(&mut self.discard);
            pile.reverse();
            pile.append(&mut self.draw);
            self.draw = pile;
        } else {
            self.draw.append(&mut self.discard);
            self.draw.shuffle(&mut self.rng);
        }
    }

    fn move_top_card_to_in_use(&mut self) -> Option<Card> {
        let card = self.draw.pop()?;
        self.in_use.push(card);
        Some(card)
    }

    fn move_all_in_use_to_discard(&mut self) {
        self.discard.append(&mut self.in_use);
    }
}
