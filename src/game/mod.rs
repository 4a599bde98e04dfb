//! Core match state machine and stat-finalization protocol.
//!
//! A [`GameSession`] models one live beer die match: the four-player
//! roster, the ordered move log, and the derived score. When a match
//! finishes, [`finalize`] translates it into a batch of
//! [`PersistenceOp`]s for the storage layer to apply atomically.

mod error;
mod finalize;
mod log;
mod rules;
mod session;

pub use error::GameError;
pub use finalize::{Outcome, PersistenceOp, finalize};
pub use log::{Action, MoveLog};
pub use rules::points;
pub use session::{GameSession, Phase, ROSTER_SIZE, Roster, Score, TEAM_SIZE, Team};

/// Opaque, stable handle referencing a player record in the directory.
pub type PlayerId = i32;
