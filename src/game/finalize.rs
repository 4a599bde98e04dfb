//! Stat finalization: translates a finished match into persistence ops.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::{CounterKey, EventCatalog};
use crate::game::{GameError, GameSession, Phase, PlayerId, ROSTER_SIZE, Team};

/// Match outcome from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// The player's team won.
    #[display("win")]
    Win,
    /// The player's team lost.
    #[display("loss")]
    Loss,
}

impl Outcome {
    /// The outcome for a player on `team` given the winning team.
    pub fn for_team(team: Team, winner: Team) -> Self {
        if team == winner { Self::Win } else { Self::Loss }
    }
}

/// One abstract instruction for the durable store.
///
/// The whole batch produced by [`finalize`] must be applied atomically:
/// a crash mid-commit must not leave per-action increments without the
/// matching outcome and totals updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistenceOp {
    /// Add `amount` to one of the player's event counters.
    IncrementCounter {
        /// Player whose counter changes.
        player: PlayerId,
        /// Counter fed by the recorded event.
        counter: CounterKey,
        /// Increment size (one per recorded action).
        amount: i32,
    },
    /// Credit the player with a win or a loss.
    RecordOutcome {
        /// Player whose record changes.
        player: PlayerId,
        /// Win or loss from the player's perspective.
        outcome: Outcome,
    },
    /// Refresh the player's derived totals from the base counters.
    ///
    /// Games played and toss totals are derived values, not counters of
    /// their own, so the store recomputes them instead of double-booking.
    RecomputeTotals {
        /// Player whose totals are refreshed.
        player: PlayerId,
    },
}

/// Emits the persistence batch for a finished session.
///
/// Pure function of its inputs, with deterministic ordering: one
/// counter increment per logged action (log order), then exactly four
/// outcome updates (seating order), then exactly four totals refreshes
/// (seating order). The session is not mutated.
///
/// # Errors
///
/// [`GameError::SessionNotFinished`] unless the session is in
/// [`Phase::Finished`], and [`GameError::UnknownEvent`] if a logged
/// event no longer resolves against the catalog.
#[instrument(skip(session, catalog), fields(moves = session.moves().len()))]
pub fn finalize<C: EventCatalog>(
    session: &GameSession,
    catalog: &C,
) -> Result<Vec<PersistenceOp>, GameError> {
    if session.phase() != Phase::Finished {
        return Err(GameError::SessionNotFinished);
    }
    let winner = session.winner().ok_or(GameError::SessionNotFinished)?;

    let mut ops = Vec::with_capacity(session.moves().len() + 2 * ROSTER_SIZE);

    for action in session.moves() {
        let kind = catalog
            .resolve(action.event())
            .ok_or_else(|| GameError::UnknownEvent {
                name: action.event().clone(),
            })?;
        ops.push(PersistenceOp::IncrementCounter {
            player: *action.actor(),
            counter: kind.counter(),
            amount: 1,
        });
    }

    for &player in session.roster().players() {
        let team = session.team_of(player).expect("rostered player has a team");
        ops.push(PersistenceOp::RecordOutcome {
            player,
            outcome: Outcome::for_team(team, winner),
        });
    }

    for &player in session.roster().players() {
        ops.push(PersistenceOp::RecomputeTotals { player });
    }

    debug!(ops = ops.len(), %winner, "Finalization batch assembled");
    Ok(ops)
}
