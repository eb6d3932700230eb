//! Game values: the outcome label of perfect play from a position.

use serde::{Deserialize, Serialize};

/// Outcome of optimal play from a given position, always read from the AI's
/// perspective.
///
/// The variants are declared losing-first so the derived `Ord` makes
/// `Loss < Win`: the maximizer folds children with `max`, the minimizer
/// with `min`, and both get the ordering they expect.
///
/// ## Example
///
/// ```
/// use takeaway::core::GameValue;
///
/// assert!(GameValue::Loss < GameValue::Win);
/// assert_eq!(GameValue::Win.score(), 1);
/// assert_eq!(GameValue::Loss.score(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameValue {
    /// The AI loses under perfect play.
    Loss,
    /// The AI wins under perfect play.
    Win,
}

impl GameValue {
    /// Integer score: +1 for a win, -1 for a loss.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            GameValue::Loss => -1,
            GameValue::Win => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(GameValue::Loss < GameValue::Win);
        assert_eq!(
            [GameValue::Loss, GameValue::Win].into_iter().max(),
            Some(GameValue::Win)
        );
        assert_eq!(
            [GameValue::Loss, GameValue::Win].into_iter().min(),
            Some(GameValue::Loss)
        );
    }

    #[test]
    fn test_score() {
        assert_eq!(GameValue::Win.score(), 1);
        assert_eq!(GameValue::Loss.score(), -1);
    }

    #[test]
    fn test_serialization() {
        let value = GameValue::Win;
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: GameValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);
    }
}
