//! Table configuration options.

use core::time::Duration;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_dealer_stands_at(17)
///     .with_before_deal(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// The dealer keeps drawing while their score is below this value.
    pub dealer_stands_at: u8,
    /// Pause before the opening shuffle of a session.
    pub settle: Duration,
    /// Pause after every shuffle.
    pub after_shuffle: Duration,
    /// Pause after each card dealt by the table itself.
    pub before_deal: Duration,
    /// Pause before the dealer plays and before a bust is settled.
    pub before_results: Duration,
    /// Pause after a hit that did not bust.
    pub after_hit: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_stands_at: 17,
            settle: Duration::from_millis(200),
            after_shuffle: Duration::from_millis(700),
            before_deal: Duration::from_millis(500),
            before_results: Duration::from_millis(500),
            after_hit: Duration::from_millis(600),
        }
    }
}

impl TableOptions {
    /// Returns the default options with every pause set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::instant();
    /// assert_eq!(options.after_shuffle, Duration::ZERO);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            decks: 1,
            dealer_stands_at: 17,
            settle: Duration::ZERO,
            after_shuffle: Duration::ZERO,
            before_deal: Duration::ZERO,
            before_results: Duration::ZERO,
            after_hit: Duration::ZERO,
        }
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the score the dealer stands at.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the pause before the opening shuffle.
    #[must_use]
    pub const fn with_settle(mut self, pause: Duration) -> Self {
        self.settle = pause;
        self
    }

    /// Sets the pause after a shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_after_shuffle(Duration::from_secs(1));
    /// assert_eq!(options.after_shuffle, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub const fn with_after_shuffle(mut self, pause: Duration) -> Self {
        self.after_shuffle = pause;
        self
    }

    /// Sets the pause after each table-driven deal.
    #[must_use]
    pub const fn with_before_deal(mut self, pause: Duration) -> Self {
        self.before_deal = pause;
        self
    }

    /// Sets the pause before results.
    #[must_use]
    pub const fn with_before_results(mut self, pause: Duration) -> Self {
        self.before_results = pause;
        self
    }

    /// Sets the pause after a hit.
    #[must_use]
    pub const fn with_after_hit(mut self, pause: Duration) -> Self {
        self.after_hit = pause;
        self
    }
}
