//! Tests for the match state machine.

use beer_die::{GameError, GameSession, Phase, PlayerDirectory, PlayerId, Team};

/// Directory stub where every player exists and is named after its id.
struct FixedNames;

impl PlayerDirectory for FixedNames {
    fn exists(&self, _player: PlayerId) -> bool {
        true
    }

    fn name_of(&self, player: PlayerId) -> Option<String> {
        Some(format!("Player {player}"))
    }
}

/// Directory stub where no player exists.
struct EmptyDirectory;

impl PlayerDirectory for EmptyDirectory {
    fn exists(&self, _player: PlayerId) -> bool {
        false
    }

    fn name_of(&self, _player: PlayerId) -> Option<String> {
        None
    }
}

/// Seats players 1-4, leaving the session active.
fn active_session() -> GameSession {
    let mut session = GameSession::new();
    for id in 1..=4 {
        session.assign_player(id).expect("Seating failed");
    }
    session
}

#[test]
fn test_fourth_player_activates_session() {
    let mut session = GameSession::new();
    assert_eq!(session.phase(), Phase::Setup);

    for id in 1..=3 {
        let phase = session.assign_player(id).expect("Seating failed");
        assert_eq!(phase, Phase::Setup);
    }
    let phase = session.assign_player(4).expect("Seating failed");
    assert_eq!(phase, Phase::Active);
}

#[test]
fn test_duplicate_player_rejected() {
    let mut session = GameSession::new();
    session.assign_player(7).expect("Seating failed");
    let result = session.assign_player(7);
    assert_eq!(result, Err(GameError::DuplicatePlayer { player: 7 }));
    assert_eq!(session.roster().players(), &[7]);
}

#[test]
fn test_fifth_assignment_rejected() {
    let mut session = active_session();
    assert_eq!(session.assign_player(5), Err(GameError::RosterFull));
    assert_eq!(session.roster().players().len(), 4);
}

#[test]
fn test_team_membership_fixed_by_seating_order() {
    let session = active_session();
    assert_eq!(session.team_of(1), Some(Team::One));
    assert_eq!(session.team_of(2), Some(Team::One));
    assert_eq!(session.team_of(3), Some(Team::Two));
    assert_eq!(session.team_of(4), Some(Team::Two));
    assert_eq!(session.team_of(9), None);
}

#[test]
fn test_record_requires_complete_roster() {
    let mut session = GameSession::new();
    session.assign_player(1).expect("Seating failed");
    let result = session.record_move(&FixedNames, 1, "Sink");
    assert_eq!(result.unwrap_err(), GameError::RosterIncomplete);
}

#[test]
fn test_unknown_actor_rejected() {
    let mut session = active_session();
    let result = session.record_move(&FixedNames, 42, "Sink");
    assert_eq!(result.unwrap_err(), GameError::UnknownActor { player: 42 });
    assert!(session.moves().is_empty());
}

#[test]
fn test_deleted_actor_rejected() {
    let mut session = active_session();
    let result = session.record_move(&EmptyDirectory, 1, "Sink");
    assert_eq!(result.unwrap_err(), GameError::UnknownActor { player: 1 });
    assert!(session.moves().is_empty());
}

#[test]
fn test_move_credits_acting_team() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 3, "Sink")
        .expect("Move failed");
    assert_eq!(session.score().team1(), 0);
    assert_eq!(session.score().team2(), 3);
}

#[test]
fn test_actor_name_snapshotted() {
    let mut session = active_session();
    let action = session
        .record_move(&FixedNames, 2, "Airball")
        .expect("Move failed");
    assert_eq!(action.actor_name(), "Player 2");
    assert_eq!(action.event(), "Airball");
}

#[test]
fn test_zero_point_event_still_logged() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 1, "Airball")
        .expect("Move failed");
    assert_eq!(session.moves().len(), 1);
    assert_eq!(session.score().team1(), 0);
    assert_eq!(session.score().team2(), 0);
}

#[test]
fn test_event_scoring_is_case_insensitive() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 1, "SINK")
        .expect("Move failed");
    assert_eq!(session.score().team1(), 3);
}

#[test]
fn test_undo_on_empty_log() {
    let mut session = active_session();
    assert_eq!(session.undo_last_move(), Err(GameError::EmptyLog));
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.score().team1(), 0);
}

#[test]
fn test_record_undo_round_trip() {
    let mut session = active_session();
    let baseline = session.score();

    let moves = [(1, "2 Pointer"), (3, "Sink"), (2, "Airball"), (4, "Successful Fifa")];
    for (actor, event) in moves {
        session
            .record_move(&FixedNames, actor, event)
            .expect("Move failed");
    }
    for _ in 0..moves.len() {
        session.undo_last_move().expect("Undo failed");
    }

    assert_eq!(session.score(), baseline);
    assert!(session.moves().is_empty());
}

#[test]
fn test_undo_returns_last_action() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 1, "1 Pointer")
        .expect("Move failed");
    session
        .record_move(&FixedNames, 4, "Sink")
        .expect("Move failed");

    let undone = session.undo_last_move().expect("Undo failed");
    assert_eq!(*undone.actor(), 4);
    assert_eq!(undone.event(), "Sink");
    assert_eq!(session.score().team1(), 1);
    assert_eq!(session.score().team2(), 0);
}

#[test]
fn test_score_recomputable_after_every_operation() {
    let mut session = active_session();
    assert_eq!(session.recomputed_score(), session.score());

    for (actor, event) in [(1, "Sink"), (2, "Too Short"), (3, "2 Pointer"), (4, "1 Pointer")] {
        session
            .record_move(&FixedNames, actor, event)
            .expect("Move failed");
        assert_eq!(session.recomputed_score(), session.score());
    }

    session.undo_last_move().expect("Undo failed");
    assert_eq!(session.recomputed_score(), session.score());
}

#[test]
fn test_tied_game_cannot_end() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 1, "2 Pointer")
        .expect("Move failed");
    session
        .record_move(&FixedNames, 3, "Sink")
        .expect("Move failed");
    session
        .record_move(&FixedNames, 2, "1 Pointer")
        .expect("Move failed");
    assert_eq!(session.score().team1(), 3);
    assert_eq!(session.score().team2(), 3);

    assert_eq!(session.attempt_finish(), Err(GameError::TiedGame));
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.moves().len(), 3);

    session
        .record_move(&FixedNames, 4, "1 Pointer")
        .expect("Move failed");
    assert_eq!(session.score().team1(), 3);
    assert_eq!(session.score().team2(), 4);

    let winner = session.attempt_finish().expect("Finish failed");
    assert_eq!(winner, Team::Two);
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.winner(), Some(Team::Two));
}

#[test]
fn test_finished_session_rejects_mutation() {
    let mut session = active_session();
    session
        .record_move(&FixedNames, 1, "Sink")
        .expect("Move failed");
    session.attempt_finish().expect("Finish failed");

    assert_eq!(
        session.record_move(&FixedNames, 1, "Sink").unwrap_err(),
        GameError::SessionClosed
    );
    assert_eq!(session.undo_last_move(), Err(GameError::SessionClosed));
    assert_eq!(session.attempt_finish(), Err(GameError::SessionClosed));
    assert_eq!(session.assign_player(5), Err(GameError::SessionClosed));
    assert_eq!(session.moves().len(), 1);
}
