//! Error types for table operations.

use thiserror::Error;

/// Why a player action was ignored.
///
/// A rejected action leaves the table untouched; callers are free to drop
/// the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A deal is still outstanding.
    #[error("a dealing operation is still in progress")]
    ActionInProgress,
    /// The round is not in a state that accepts this action.
    #[error("invalid round state for this action")]
    InvalidState,
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Both the draw pile and the discard pile are empty.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}
