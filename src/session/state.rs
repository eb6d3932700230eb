//! Session snapshots: everything the UI can observe about a game in play.
//!
//! ## SessionState
//!
//! An immutable snapshot of one round:
//! - Pile, phase, and status message
//! - Turn history
//! - The AI-reply ticket counter
//!
//! Snapshots are only produced by [`SessionState::new`] and the reducer in
//! [`super::reducer`]; the UI never mutates one in place.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Move, Pile, Role};

/// Every round starts from a pile of 10 coins.
pub const STARTING_PILE: Pile = Pile::new(10);

/// How long the UI should wait before delivering the AI's reply.
///
/// Pure pacing: the reply itself is computed synchronously inside the
/// reducer when the [`super::SessionEvent::AiMoveDue`] event lands.
pub const AI_MOVE_DELAY: Duration = Duration::from_secs(1);

/// Identifies one scheduled AI reply.
///
/// Tickets are issued from a counter that survives resets, so a reply
/// scheduled before a reset can never match the pending phase of any later
/// snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiTicket(pub u32);

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the human to pick a move.
    HumanTurn,
    /// The human has moved; the AI's reply is scheduled under `ticket`.
    AiPending {
        /// The only ticket the pending reply will be accepted under.
        ticket: AiTicket,
    },
    /// The round is over. `loser` took the last coin.
    GameOver {
        /// The seat that took the last coin and lost the round.
        loser: Role,
    },
}

/// One applied move, kept for the session log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved.
    pub role: Role,
    /// The move taken.
    pub taken: Move,
    /// The pile left behind.
    pub remaining: Pile,
}

/// Immutable snapshot of a round in play.
///
/// ## Example
///
/// ```
/// use takeaway::session::{SessionPhase, SessionState, STARTING_PILE};
///
/// let state = SessionState::new();
/// assert_eq!(state.pile, STARTING_PILE);
/// assert_eq!(state.phase, SessionPhase::HumanTurn);
/// assert!(state.history.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Coins remaining in the shared pile.
    pub pile: Pile,

    /// Current phase of the round.
    pub phase: SessionPhase,

    /// Status line for the UI.
    pub message: String,

    /// Every move applied this round, oldest first.
    pub history: Vector<TurnRecord>,

    /// Count of AI tickets issued so far. Survives resets so that stale
    /// replies stay stale.
    pub tickets_issued: u32,
}

impl SessionState {
    /// The starting snapshot: full pile, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pile: STARTING_PILE,
            phase: SessionPhase::HumanTurn,
            message: "Your turn! Pick 1, 2, or 3 coins.".to_string(),
            history: Vector::new(),
            tickets_issued: 0,
        }
    }

    /// The starting snapshot, keeping this snapshot's ticket counter.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            tickets_issued: self.tickets_issued,
            ..Self::new()
        }
    }

    /// The ticket an embedding UI must schedule an
    /// [`super::SessionEvent::AiMoveDue`] event for, if a reply is pending.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<AiTicket> {
        match self.phase {
            SessionPhase::AiPending { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Check whether the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOver { .. })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
