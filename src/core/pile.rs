//! The shared coin pile.
//!
//! A `Pile` is a plain count of coins remaining. It is only ever reduced by
//! removing a legal move's worth of coins; a move that does not fit is
//! rejected rather than clamped.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Count of coins remaining in the shared draw.
///
/// ## Example
///
/// ```
/// use takeaway::core::{Move, Pile};
///
/// let pile = Pile::new(5);
/// assert_eq!(pile.coins(), 5);
///
/// // Removing coins yields the smaller pile
/// let pile = pile.remove(Move::new(3)).unwrap();
/// assert_eq!(pile.coins(), 2);
///
/// // A move larger than the pile is rejected, not clamped
/// assert_eq!(pile.remove(Move::new(3)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pile(u32);

impl Pile {
    /// Create a pile with the given number of coins.
    #[must_use]
    pub const fn new(coins: u32) -> Self {
        Self(coins)
    }

    /// Get the number of coins remaining.
    #[must_use]
    pub const fn coins(self) -> u32 {
        self.0
    }

    /// Check whether the pile is exhausted.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remove a move's worth of coins.
    ///
    /// Returns `None` if the move would take more coins than remain. The
    /// pile never goes negative and is never clamped.
    #[must_use]
    pub fn remove(self, mv: Move) -> Option<Pile> {
        self.0.checked_sub(mv.coins() as u32).map(Pile)
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "1 coin"),
            n => write!(f, "{} coins", n),
        }
    }
}
