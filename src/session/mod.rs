//! Game sessions: one human-versus-AI round from full pile to last coin.
//!
//! ## Overview
//!
//! The session layer is an explicit state machine over immutable snapshots:
//!
//! ```text
//! HumanTurn --HumanTake--> AiPending --AiMoveDue--> HumanTurn
//!     |                        |
//!     +--(pile emptied)--------+--(pile emptied)--> GameOver
//! ```
//!
//! [`reduce`] is the only way forward: it consumes a snapshot and an event
//! and returns the next snapshot, leaving the input untouched. Whoever takes
//! the last coin loses the round.
//!
//! ## Driving the AI reply
//!
//! The AI answers after a short pause rather than instantly. The reducer
//! does not sleep; instead, entering [`SessionPhase::AiPending`] issues an
//! [`AiTicket`], and the embedding UI schedules a single-shot
//! [`SessionEvent::AiMoveDue`] carrying that ticket after [`AI_MOVE_DELAY`].
//! A reply whose ticket no longer matches — because a reset produced a fresh
//! snapshot in between — is ignored, so a queued reply can never land on a
//! freshly reset pile.
//!
//! ## Usage
//!
//! ```
//! use takeaway::core::Move;
//! use takeaway::session::{reduce, SessionEvent, SessionState};
//!
//! let mut state = SessionState::new();
//! state = reduce(&state, SessionEvent::HumanTake(Move::new(2)));
//!
//! // ... AI_MOVE_DELAY later ...
//! if let Some(ticket) = state.pending_ticket() {
//!     state = reduce(&state, SessionEvent::AiMoveDue { ticket });
//! }
//! assert!(state.message.starts_with("AI picked"));
//! ```

pub mod reducer;
pub mod state;

pub use reducer::{reduce, SessionEvent};
pub use state::{
    AiTicket, SessionPhase, SessionState, TurnRecord, AI_MOVE_DELAY, STARTING_PILE,
};
