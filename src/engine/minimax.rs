//! Exhaustive minimax evaluation of take-away positions.
//!
//! ## Sign Convention
//!
//! Values are always read from the AI's perspective. The base case assigns
//! the *player to move at an empty pile* the loss: whoever faces an empty
//! pile did not take the last coin, so the previous mover — the one who
//! emptied the pile — wins the evaluation. The convention is load-bearing:
//! flipping it changes which side wins every position whose pile is a
//! multiple of 4, and the selector in [`super::select`] is built on top of
//! exactly this reading.

use crate::core::{GameValue, Move, Pile, Role};

/// Determine the outcome of perfect play from `pile` with `to_move` next.
///
/// The AI maximizes over its candidate moves; the human is modeled as fully
/// adversarial and minimizes. Moves that would overdraw the pile are
/// skipped, never clamped.
///
/// ## Example
///
/// ```
/// use takeaway::engine::evaluate;
/// use takeaway::core::{GameValue, Pile, Role};
///
/// // An empty pile is a loss for whoever is to move.
/// assert_eq!(evaluate(Pile::new(0), Role::Ai), GameValue::Loss);
/// assert_eq!(evaluate(Pile::new(0), Role::Human), GameValue::Win);
///
/// // Piles divisible by 4 are lost for the player to move.
/// assert_eq!(evaluate(Pile::new(8), Role::Ai), GameValue::Loss);
/// assert_eq!(evaluate(Pile::new(7), Role::Ai), GameValue::Win);
/// ```
#[must_use]
pub fn evaluate(pile: Pile, to_move: Role) -> GameValue {
    if pile.is_empty() {
        return match to_move {
            Role::Ai => GameValue::Loss,
            Role::Human => GameValue::Win,
        };
    }

    let children = Move::all()
        .filter_map(|mv| pile.remove(mv))
        .map(|remaining| evaluate(remaining, to_move.opponent()));

    let value = match to_move {
        Role::Ai => children.max(),
        Role::Human => children.min(),
    };

    // A non-empty pile always admits at least the 1-coin move.
    value.expect("non-empty pile has a legal move")
}
