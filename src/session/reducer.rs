//! The session reducer: `(state, event) -> state`.
//!
//! All round progression flows through [`reduce`]. It is a pure function on
//! snapshots: events that are not applicable in the current phase (a click
//! after the round ended, an AI reply whose ticket no longer matches) return
//! the state unchanged.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Role};
use crate::engine::best_move;

use super::state::{AiTicket, SessionPhase, SessionState, TurnRecord};

/// An input to the session reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The human chose a move.
    HumanTake(Move),
    /// The scheduled AI reply for `ticket` came due.
    AiMoveDue {
        /// Ticket the reply was scheduled under.
        ticket: AiTicket,
    },
    /// Restore the starting position.
    Reset,
}

/// Apply one event to a snapshot, producing the next snapshot.
///
/// ## Example
///
/// ```
/// use takeaway::core::{Move, Pile};
/// use takeaway::session::{reduce, SessionEvent, SessionState};
///
/// let state = SessionState::new();
/// let state = reduce(&state, SessionEvent::HumanTake(Move::new(2)));
/// assert_eq!(state.pile, Pile::new(8));
///
/// // The AI's reply lands only under the ticket issued for it.
/// let ticket = state.pending_ticket().unwrap();
/// let state = reduce(&state, SessionEvent::AiMoveDue { ticket });
/// assert_eq!(state.pile, Pile::new(7));
/// ```
#[must_use]
pub fn reduce(state: &SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::HumanTake(mv) => human_take(state, mv),
        SessionEvent::AiMoveDue { ticket } => ai_reply(state, ticket),
        SessionEvent::Reset => state.reset(),
    }
}

/// Apply the human's move, if one is currently allowed.
fn human_take(state: &SessionState, mv: Move) -> SessionState {
    // Only HumanTurn accepts input; replies in flight and finished rounds
    // ignore clicks.
    if state.phase != SessionPhase::HumanTurn {
        return state.clone();
    }

    let Some(remaining) = state.pile.remove(mv) else {
        let mut next = state.clone();
        next.message = "Invalid move. You can take between 1 and 3 coins.".to_string();
        return next;
    };

    let mut next = state.clone();
    next.pile = remaining;
    next.history.push_back(TurnRecord {
        role: Role::Human,
        taken: mv,
        remaining,
    });

    if remaining.is_empty() {
        next.phase = SessionPhase::GameOver { loser: Role::Human };
        next.message = "You took the last coin! You lose!".to_string();
    } else {
        let ticket = AiTicket(state.tickets_issued);
        next.tickets_issued = state.tickets_issued + 1;
        next.phase = SessionPhase::AiPending { ticket };
    }

    next
}

/// Apply the AI's reply, if `ticket` still identifies the pending one.
fn ai_reply(state: &SessionState, ticket: AiTicket) -> SessionState {
    let SessionPhase::AiPending { ticket: pending } = state.phase else {
        return state.clone();
    };
    if pending != ticket {
        return state.clone();
    }

    // AiPending is only entered with coins remaining, so the engine always
    // has a reply here and it always fits the pile.
    let Some(reply) = best_move(state.pile) else {
        return state.clone();
    };
    let Some(remaining) = state.pile.remove(reply) else {
        return state.clone();
    };

    let mut next = state.clone();
    next.pile = remaining;
    next.history.push_back(TurnRecord {
        role: Role::Ai,
        taken: reply,
        remaining,
    });

    if remaining.is_empty() {
        next.phase = SessionPhase::GameOver { loser: Role::Ai };
        next.message = "AI took the last coin! AI loses, you win!".to_string();
    } else {
        next.phase = SessionPhase::HumanTurn;
        next.message = format!("AI picked {} coin(s). Your turn!", reply.coins());
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pile;

    #[test]
    fn test_human_take_subtracts_and_schedules_reply() {
        let state = SessionState::new();
        let next = reduce(&state, SessionEvent::HumanTake(Move::new(2)));

        assert_eq!(next.pile, Pile::new(8));
        assert_eq!(next.pending_ticket(), Some(AiTicket(0)));
        assert_eq!(next.tickets_issued, 1);
        assert_eq!(next.history.len(), 1);
    }

    #[test]
    fn test_oversized_human_take_only_changes_message() {
        let mut state = SessionState::new();
        state.pile = Pile::new(2);

        let next = reduce(&state, SessionEvent::HumanTake(Move::new(3)));

        assert_eq!(next.pile, Pile::new(2));
        assert_eq!(next.phase, SessionPhase::HumanTurn);
        assert!(next.history.is_empty());
        assert_eq!(
            next.message,
            "Invalid move. You can take between 1 and 3 coins."
        );
    }

    #[test]
    fn test_human_click_ignored_while_reply_pending() {
        let state = SessionState::new();
        let pending = reduce(&state, SessionEvent::HumanTake(Move::new(1)));

        let clicked = reduce(&pending, SessionEvent::HumanTake(Move::new(1)));
        assert_eq!(clicked, pending);
    }

    #[test]
    fn test_mismatched_ticket_ignored() {
        let state = SessionState::new();
        let pending = reduce(&state, SessionEvent::HumanTake(Move::new(1)));
        assert_eq!(pending.pending_ticket(), Some(AiTicket(0)));

        let next = reduce(&pending, SessionEvent::AiMoveDue { ticket: AiTicket(9) });
        assert_eq!(next, pending);
    }

    #[test]
    fn test_reply_after_reset_is_stale() {
        let state = SessionState::new();
        let pending = reduce(&state, SessionEvent::HumanTake(Move::new(2)));
        let ticket = pending.pending_ticket().unwrap();

        let reset = reduce(&pending, SessionEvent::Reset);
        assert_eq!(reset.pile, Pile::new(10));

        // The queued reply fires anyway; nothing may change.
        let next = reduce(&reset, SessionEvent::AiMoveDue { ticket });
        assert_eq!(next, reset);
    }

    #[test]
    fn test_tickets_never_repeat_across_resets() {
        let state = SessionState::new();
        let pending = reduce(&state, SessionEvent::HumanTake(Move::new(2)));
        let first = pending.pending_ticket().unwrap();

        let reset = reduce(&pending, SessionEvent::Reset);
        let pending = reduce(&reset, SessionEvent::HumanTake(Move::new(2)));
        let second = pending.pending_ticket().unwrap();

        assert_ne!(first, second);
    }
}
