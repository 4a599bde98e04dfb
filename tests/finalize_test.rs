//! Tests for the stat-finalization protocol.

use beer_die::{
    CounterKey, GameError, GameSession, Outcome, PersistenceOp, PlayerDirectory, PlayerId,
    StandardCatalog, finalize,
};

struct FixedNames;

impl PlayerDirectory for FixedNames {
    fn exists(&self, _player: PlayerId) -> bool {
        true
    }

    fn name_of(&self, player: PlayerId) -> Option<String> {
        Some(format!("Player {player}"))
    }
}

/// Plays the standard scenario: team 2 wins 4-3 over four moves.
fn finished_session() -> GameSession {
    let mut session = GameSession::new();
    for id in 1..=4 {
        session.assign_player(id).expect("Seating failed");
    }
    for (actor, event) in [
        (1, "2 Pointer"),
        (3, "Sink"),
        (2, "1 Pointer"),
        (4, "1 Pointer"),
    ] {
        session
            .record_move(&FixedNames, actor, event)
            .expect("Move failed");
    }
    session.attempt_finish().expect("Finish failed");
    session
}

#[test]
fn test_finalize_requires_finished_session() {
    let mut session = GameSession::new();
    for id in 1..=4 {
        session.assign_player(id).expect("Seating failed");
    }
    let result = finalize(&session, &StandardCatalog);
    assert_eq!(result.unwrap_err(), GameError::SessionNotFinished);
}

#[test]
fn test_op_counts_and_ordering() {
    let session = finished_session();
    let ops = finalize(&session, &StandardCatalog).expect("Finalize failed");

    let moves = session.moves().len();
    assert_eq!(ops.len(), moves + 4 + 4);

    assert!(
        ops[..moves]
            .iter()
            .all(|op| matches!(op, PersistenceOp::IncrementCounter { .. }))
    );
    assert!(
        ops[moves..moves + 4]
            .iter()
            .all(|op| matches!(op, PersistenceOp::RecordOutcome { .. }))
    );
    assert!(
        ops[moves + 4..]
            .iter()
            .all(|op| matches!(op, PersistenceOp::RecomputeTotals { .. }))
    );
}

#[test]
fn test_increments_follow_log_order() {
    let session = finished_session();
    let ops = finalize(&session, &StandardCatalog).expect("Finalize failed");

    let expected = [
        (1, CounterKey::Pts2),
        (3, CounterKey::Sinks),
        (2, CounterKey::Pts1),
        (4, CounterKey::Pts1),
    ];
    for (op, (actor, key)) in ops.iter().zip(expected) {
        assert_eq!(
            *op,
            PersistenceOp::IncrementCounter {
                player: actor,
                counter: key,
                amount: 1,
            }
        );
    }
}

#[test]
fn test_outcomes_follow_roster_order() {
    let session = finished_session();
    let ops = finalize(&session, &StandardCatalog).expect("Finalize failed");
    let moves = session.moves().len();

    let expected = [
        (1, Outcome::Loss),
        (2, Outcome::Loss),
        (3, Outcome::Win),
        (4, Outcome::Win),
    ];
    for (op, (player, outcome)) in ops[moves..moves + 4].iter().zip(expected) {
        assert_eq!(*op, PersistenceOp::RecordOutcome { player, outcome });
    }

    let totals: Vec<_> = ops[moves + 4..]
        .iter()
        .map(|op| match op {
            PersistenceOp::RecomputeTotals { player } => *player,
            other => panic!("Expected totals refresh, got {other:?}"),
        })
        .collect();
    assert_eq!(totals, vec![1, 2, 3, 4]);
}

#[test]
fn test_zero_point_event_produces_increment() {
    let mut session = GameSession::new();
    for id in 1..=4 {
        session.assign_player(id).expect("Seating failed");
    }
    session
        .record_move(&FixedNames, 2, "Airball")
        .expect("Move failed");
    session
        .record_move(&FixedNames, 3, "Sink")
        .expect("Move failed");
    session.attempt_finish().expect("Finish failed");

    let ops = finalize(&session, &StandardCatalog).expect("Finalize failed");
    assert_eq!(
        ops[0],
        PersistenceOp::IncrementCounter {
            player: 2,
            counter: CounterKey::Airballs,
            amount: 1,
        }
    );
    assert_eq!(ops.len(), 2 + 4 + 4);
}

#[test]
fn test_finalize_is_pure() {
    let session = finished_session();
    let first = finalize(&session, &StandardCatalog).expect("Finalize failed");
    let second = finalize(&session, &StandardCatalog).expect("Finalize failed");
    assert_eq!(first, second);
    assert_eq!(session.moves().len(), 4);
}
