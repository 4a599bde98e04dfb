//! Beer die scorekeeping with durable per-player statistics.
//!
//! # Architecture
//!
//! - **Game**: the match state machine (roster, move log, derived
//!   score, undo, end-of-game) and the finalization protocol that turns
//!   a finished match into a batch of persistence operations
//! - **Catalog**: the fixed set of recordable events and the counters
//!   they feed
//! - **Db**: diesel/SQLite player records and the atomic application of
//!   finalization batches
//! - **Console**: the interactive operator loop; the only place that
//!   reads input or prints
//!
//! # Example
//!
//! ```
//! use beer_die::{GameSession, Phase, PlayerDirectory, PlayerId, StandardCatalog, finalize};
//!
//! struct Names;
//! impl PlayerDirectory for Names {
//!     fn exists(&self, _player: PlayerId) -> bool {
//!         true
//!     }
//!     fn name_of(&self, player: PlayerId) -> Option<String> {
//!         Some(format!("Player {player}"))
//!     }
//! }
//!
//! # fn main() -> Result<(), beer_die::GameError> {
//! let mut session = GameSession::new();
//! for id in 1..=4 {
//!     session.assign_player(id)?;
//! }
//! assert_eq!(session.phase(), Phase::Active);
//!
//! session.record_move(&Names, 1, "Sink")?;
//! let winner = session.attempt_finish()?;
//! let ops = finalize(&session, &StandardCatalog)?;
//! assert_eq!(ops.len(), 1 + 4 + 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod db;
mod directory;
mod game;
mod service;

// Console-facing modules used by the binary
pub mod cli;
pub mod console;

// Crate-level exports - event catalog
pub use catalog::{CounterKey, EventCatalog, EventKind, StandardCatalog};

// Crate-level exports - player directory interface
pub use directory::PlayerDirectory;

// Crate-level exports - core match state machine
pub use game::{
    Action, GameError, GameSession, MoveLog, Outcome, PersistenceOp, Phase, PlayerId,
    ROSTER_SIZE, Roster, Score, TEAM_SIZE, Team, finalize, points,
};

// Crate-level exports - persistence
pub use db::{DbError, NewPlayer, PlayerRow, StatsRepository};

// Crate-level exports - service layer
pub use service::StatsService;
