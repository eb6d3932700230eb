//! Moves: how many coins a player removes in one turn.
//!
//! The move range is fixed by the rules at 1..=3 coins. `Move` enforces the
//! range at construction, so every `Move` in circulation is well-formed; the
//! only remaining legality question is whether it fits the current pile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pile::Pile;

/// Number of coins removed in one turn, 1..=3 inclusive.
///
/// ## Example
///
/// ```
/// use takeaway::core::{Move, Pile};
///
/// let moves: Vec<_> = Move::all().collect();
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves[0], Move::new(1));
///
/// // Only moves that fit the pile are legal
/// let legal = Move::legal_from(Pile::new(2));
/// assert_eq!(legal.as_slice(), &[Move::new(1), Move::new(2)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(u8);

/// Fewest coins a single move may take.
pub const MIN_TAKE: u8 = 1;

/// Most coins a single move may take.
pub const MAX_TAKE: u8 = 3;

impl Move {
    /// Create a move taking the given number of coins.
    ///
    /// Panics if `coins` is outside 1..=3.
    #[must_use]
    pub const fn new(coins: u8) -> Self {
        assert!(coins >= MIN_TAKE && coins <= MAX_TAKE, "A move takes 1 to 3 coins");
        Self(coins)
    }

    /// Get the number of coins this move takes.
    #[must_use]
    pub const fn coins(self) -> u8 {
        self.0
    }

    /// Iterate over every move in the rules, smallest first.
    pub fn all() -> impl Iterator<Item = Move> {
        (MIN_TAKE..=MAX_TAKE).map(Move)
    }

    /// Check whether this move can be taken from the given pile.
    #[must_use]
    pub fn fits(self, pile: Pile) -> bool {
        self.0 as u32 <= pile.coins()
    }

    /// The moves that can legally be taken from the given pile, smallest
    /// first. Empty when the pile is exhausted.
    #[must_use]
    pub fn legal_from(pile: Pile) -> SmallVec<[Move; 3]> {
        Move::all().filter(|mv| mv.fits(pile)).collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "take 1 coin"),
            n => write!(f, "take {} coins", n),
        }
    }
}
