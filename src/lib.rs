//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs rounds between one player
//! and an automated dealer: dealing from a [`Shoe`], scoring hands, enforcing
//! turn order, and settling each round on a session [`Scoreboard`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::instant(), 42);
//! table.start().unwrap();
//! table.run_until_idle().unwrap();
//!
//! for event in table.drain_events() {
//!     let _ = event;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod pacing;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, DealError};
pub use event::TableEvent;
pub use game::{Actions, RoundState, Table};
pub use hand::{Hand, Owner, evaluate};
pub use options::TableOptions;
#[cfg(feature = "std")]
pub use pacing::SleepPacer;
pub use pacing::{InstantPacer, Pacer, Pause};
pub use result::{Cue, Outcome, Scoreboard, Winner, classify, resolve};
pub use shoe::{CardShoe, Shoe};
