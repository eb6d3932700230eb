//! Best-move selection for the AI.

use crate::core::{GameValue, Move, Pile, Role};

use super::minimax::evaluate;

/// Select the AI's move for the current pile.
///
/// Returns `None` only when the pile is already empty; callers are expected
/// to consult the engine only while coins remain, so a `None` here signals a
/// sequencing bug in the caller rather than a game outcome.
///
/// Piles of 1-3 coins are answered from a fixed endgame table. Larger piles
/// score each candidate by evaluating the position handed to the human and
/// keep the first candidate with the strictly best score, so ties resolve
/// to the smallest move.
///
/// ## Example
///
/// ```
/// use takeaway::engine::best_move;
/// use takeaway::core::{Move, Pile};
///
/// // 7 coins: taking 3 leaves the human a lost pile of 4.
/// assert_eq!(best_move(Pile::new(7)), Some(Move::new(3)));
///
/// // No coins, no move.
/// assert_eq!(best_move(Pile::new(0)), None);
/// ```
#[must_use]
pub fn best_move(pile: Pile) -> Option<Move> {
    match pile.coins() {
        0 => None,
        // Endgame table: leave the opponent the last coin where possible.
        1 => Some(Move::new(1)),
        2 => Some(Move::new(1)),
        3 => Some(Move::new(2)),
        _ => {
            let mut best: Option<(Move, GameValue)> = None;

            for mv in Move::legal_from(pile) {
                if let Some(remaining) = pile.remove(mv) {
                    let score = evaluate(remaining, Role::Human);
                    match best {
                        Some((_, held)) if score <= held => {}
                        _ => best = Some((mv, score)),
                    }
                }
            }

            best.map(|(mv, _)| mv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endgame_table() {
        assert_eq!(best_move(Pile::new(1)), Some(Move::new(1)));
        assert_eq!(best_move(Pile::new(2)), Some(Move::new(1)));
        assert_eq!(best_move(Pile::new(3)), Some(Move::new(2)));
    }

    #[test]
    fn test_empty_pile_has_no_move() {
        assert_eq!(best_move(Pile::new(0)), None);
    }

    #[test]
    fn test_reduces_to_multiple_of_four() {
        // 5 -> take 1 leaves 4; 7 -> take 3 leaves 4; 10 -> take 2 leaves 8.
        assert_eq!(best_move(Pile::new(5)), Some(Move::new(1)));
        assert_eq!(best_move(Pile::new(7)), Some(Move::new(3)));
        assert_eq!(best_move(Pile::new(10)), Some(Move::new(2)));
    }

    #[test]
    fn test_lost_pile_ties_to_smallest_move() {
        // From 8 every reply leaves the human a winning pile; the scan keeps
        // the first candidate.
        assert_eq!(best_move(Pile::new(8)), Some(Move::new(1)));
    }
}
