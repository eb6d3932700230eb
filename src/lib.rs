//! # takeaway
//!
//! A two-player coin take-away game with a perfect-play computer opponent.
//!
//! ## Rules
//!
//! A pile starts with 10 coins. The human and the AI alternate turns, each
//! removing 1, 2, or 3 coins. Whoever takes the last coin loses the round.
//!
//! ## Design Principles
//!
//! 1. **Pure Decision Engine**: move selection is a deterministic function of
//!    the pile, with no hidden state and no side effects.
//!
//! 2. **Immutable Sessions**: the game session is an immutable snapshot plus
//!    a pure reducer `(state, event) -> state`. The UI layer owns timers and
//!    rendering; everything it can observe lives in the snapshot.
//!
//! 3. **Stale Replies Never Land**: the AI's deferred reply carries a ticket.
//!    A reply whose ticket no longer matches the pending phase (a reset
//!    happened in between) leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: piles, moves, roles, game values
//! - `engine`: minimax evaluation and best-move selection
//! - `session`: session snapshots, events, and the reducer

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameValue, Move, Pile, Role};

pub use crate::engine::{best_move, evaluate};

pub use crate::session::{
    reduce, AiTicket, SessionEvent, SessionPhase, SessionState, TurnRecord,
    AI_MOVE_DELAY, STARTING_PILE,
};
