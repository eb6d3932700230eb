//! Player roles.
//!
//! A `Role` is a tag identifying whose turn a position belongs to. It is
//! passed by value into evaluation and never stored beyond the session
//! snapshot. For search purposes the AI is the maximizer and the human is
//! modeled as a perfectly adversarial minimizer.

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The computer opponent. Maximizer in search.
    Ai,
    /// The human player. Minimizer in search.
    Human,
}

impl Role {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Role {
        match self {
            Role::Ai => Role::Human,
            Role::Human => Role::Ai,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Ai => write!(f, "AI"),
            Role::Human => write!(f, "You"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Role::Ai.opponent(), Role::Human);
        assert_eq!(Role::Human.opponent(), Role::Ai);
        assert_eq!(Role::Ai.opponent().opponent(), Role::Ai);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Role::Ai), "AI");
        assert_eq!(format!("{}", Role::Human), "You");
    }
}
