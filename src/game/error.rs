//! Error taxonomy for the match state machine.

use derive_more::{Display, Error};

use crate::game::PlayerId;

/// Failure signal returned by a session or finalization operation.
///
/// Setup, action, log, and end-of-game errors are recoverable: the session
/// state is unchanged and the caller may retry with different input.
/// `SessionClosed` and `SessionNotFinished` indicate caller misuse of the
/// lifecycle and should not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The player is already seated in this match.
    #[display("player {player} is already in the game")]
    DuplicatePlayer {
        /// Identifier of the player that was seated twice.
        player: PlayerId,
    },
    /// All four seats are taken.
    #[display("the roster already has four players")]
    RosterFull,
    /// The match has not started because the roster is incomplete.
    #[display("the roster is not complete yet")]
    RosterIncomplete,
    /// The acting player is not on the roster.
    #[display("player {player} is not in this game")]
    UnknownActor {
        /// Identifier that failed the roster lookup.
        player: PlayerId,
    },
    /// The event name did not resolve against the catalog.
    #[display("'{name}' is not a recognized event")]
    UnknownEvent {
        /// The name that failed to resolve.
        name: String,
    },
    /// There are no moves to undo.
    #[display("there are no moves to undo")]
    EmptyLog,
    /// Scores are level; a game cannot end tied.
    #[display("cannot end the game on a tie")]
    TiedGame,
    /// The session is finished and no longer accepts mutation.
    #[display("the session is finished and can no longer change")]
    SessionClosed,
    /// Finalization was requested before the session finished.
    #[display("the session has not finished yet")]
    SessionNotFinished,
}
