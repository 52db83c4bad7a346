//! Presentation pauses.
//!
//! The table runs as a single cooperative flow. Wherever the round waits for
//! an animation to play out it hands the wait to a [`Pacer`]. A pause always
//! runs to completion before the next step; there is no way to cancel one.

use core::time::Duration;

/// A named point where the round waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pause {
    /// Before the opening shuffle of a session.
    Settle,
    /// After the shoe was shuffled.
    AfterShuffle,
    /// After a card the table dealt on its own.
    BeforeDeal,
    /// Before the dealer plays out, or before a bust is settled.
    BeforeResults,
    /// After a hit that kept the player in the round.
    AfterHit,
}

/// Waits out pauses.
pub trait Pacer {
    /// Suspends the round for `duration`.
    fn pause(&mut self, pause: Pause, duration: Duration);
}

/// A pacer that never waits. Used in tests and headless play.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&mut self, _pause: Pause, _duration: Duration) {}
}

/// A pacer that blocks the current thread for every pause.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

#[cfg(feature = "std")]
impl Pacer for SleepPacer {
    fn pause(&mut self, _pause: Pause, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
