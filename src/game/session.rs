//! The match state machine: roster, derived score, and lifecycle.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::directory::PlayerDirectory;
use crate::game::log::{Action, MoveLog};
use crate::game::{GameError, PlayerId, rules};

/// Players per team.
pub const TEAM_SIZE: usize = 2;

/// Players per match.
pub const ROSTER_SIZE: usize = 2 * TEAM_SIZE;

/// One of the two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Team {
    /// Seats 0 and 1.
    #[display("team 1")]
    One,
    /// Seats 2 and 3.
    #[display("team 2")]
    Two,
}

impl Team {
    /// The team on the other side of the table.
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Current score pair, strictly derived from the move log.
///
/// Callers never set the score directly; the session maintains it
/// incrementally as moves are recorded and undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    team1: u32,
    team2: u32,
}

impl Score {
    /// Points held by team 1.
    pub fn team1(&self) -> u32 {
        self.team1
    }

    /// Points held by team 2.
    pub fn team2(&self) -> u32 {
        self.team2
    }

    /// Points held by the given team.
    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }

    /// Whether both teams hold the same number of points.
    pub fn is_tied(&self) -> bool {
        self.team1 == self.team2
    }

    /// The strictly leading team, or `None` on a tie.
    pub fn leader(&self) -> Option<Team> {
        match self.team1.cmp(&self.team2) {
            std::cmp::Ordering::Greater => Some(Team::One),
            std::cmp::Ordering::Less => Some(Team::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn add(&mut self, team: Team, delta: u32) {
        match team {
            Team::One => self.team1 += delta,
            Team::Two => self.team2 += delta,
        }
    }

    fn subtract(&mut self, team: Team, delta: u32) {
        match team {
            Team::One => self.team1 -= delta,
            Team::Two => self.team2 -= delta,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.team1, self.team2)
    }
}

/// The fixed four-player, two-team seating for one match.
///
/// Seating order fixes team membership: seats 0 and 1 are team 1, seats
/// 2 and 3 are team 2. The roster grows from zero to four during setup
/// and never reorders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: Vec<PlayerId>,
}

impl Roster {
    fn seat(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.seats.contains(&player) {
            return Err(GameError::DuplicatePlayer { player });
        }
        if self.is_full() {
            return Err(GameError::RosterFull);
        }
        self.seats.push(player);
        Ok(())
    }

    /// Whether all four seats are taken.
    pub fn is_full(&self) -> bool {
        self.seats.len() == ROSTER_SIZE
    }

    /// Whether the player holds a seat.
    pub fn contains(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    /// The team the player is seated on, if any.
    pub fn team_of(&self, player: PlayerId) -> Option<Team> {
        self.seats.iter().position(|&p| p == player).map(|seat| {
            if seat < TEAM_SIZE {
                Team::One
            } else {
                Team::Two
            }
        })
    }

    /// Seated players in seating order.
    pub fn players(&self) -> &[PlayerId] {
        &self.seats
    }

    /// The players seated on the given team (empty until those seats fill).
    pub fn team(&self, team: Team) -> &[PlayerId] {
        let range = match team {
            Team::One => 0..TEAM_SIZE.min(self.seats.len()),
            Team::Two => TEAM_SIZE.min(self.seats.len())..self.seats.len(),
        };
        &self.seats[range]
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Roster incomplete; only seating is allowed.
    #[display("setup")]
    Setup,
    /// Roster complete; moves may be recorded and undone.
    #[display("active")]
    Active,
    /// Terminal; no further mutation.
    #[display("finished")]
    Finished,
}

/// The in-memory model of one live match.
///
/// Owns the roster, the move log, and the derived score, and enforces
/// the `Setup -> Active -> Finished` lifecycle. Dropping a session
/// before it finishes abandons the match with no side effects; nothing
/// is persisted until the finalization batch is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    roster: Roster,
    log: MoveLog,
    score: Score,
    phase: Phase,
    winner: Option<Team>,
}

impl GameSession {
    /// Creates a session awaiting its four players.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game session");
        Self {
            roster: Roster::default(),
            log: MoveLog::new(),
            score: Score::default(),
            phase: Phase::Setup,
            winner: None,
        }
    }

    /// Seats a player in the next open seat.
    ///
    /// Seating the fourth distinct player transitions the session to
    /// [`Phase::Active`]. Returns the phase after seating.
    ///
    /// # Errors
    ///
    /// [`GameError::DuplicatePlayer`] if the player already holds a seat,
    /// [`GameError::RosterFull`] once the match is live, and
    /// [`GameError::SessionClosed`] after the match has finished.
    #[instrument(skip(self))]
    pub fn assign_player(&mut self, player: PlayerId) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Setup => {}
            Phase::Active => return Err(GameError::RosterFull),
            Phase::Finished => return Err(GameError::SessionClosed),
        }
        self.roster.seat(player)?;
        if self.roster.is_full() {
            self.phase = Phase::Active;
            info!(roster = ?self.roster.players(), "Roster complete, match is live");
        } else {
            debug!(player, seated = self.roster.players().len(), "Player seated");
        }
        Ok(self.phase)
    }

    /// Records a move: appends an action and credits the actor's team.
    ///
    /// The actor's display name is snapshotted through the directory.
    /// Zero-point events are still logged; only the score is unaffected.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownActor`] if the actor is not seated or no
    /// longer exists in the directory, plus the usual lifecycle errors.
    #[instrument(skip(self, directory))]
    pub fn record_move<D: PlayerDirectory>(
        &mut self,
        directory: &D,
        actor: PlayerId,
        event: &str,
    ) -> Result<&Action, GameError> {
        self.require_active()?;
        let team = self
            .roster
            .team_of(actor)
            .ok_or(GameError::UnknownActor { player: actor })?;
        if !directory.exists(actor) {
            return Err(GameError::UnknownActor { player: actor });
        }
        let delta = rules::points(event);
        let name = directory
            .name_of(actor)
            .unwrap_or_else(|| format!("Player {actor}"));

        let action = Action::new(actor, name, event.to_string());
        debug!(%action, %team, delta, "Recording move");
        self.log.push(action);
        self.score.add(team, delta);
        Ok(self.log.last().expect("log is non-empty after push"))
    }

    /// Undoes the most recent move and debits the acting team.
    ///
    /// Single-step only; repeated calls walk back through the log in
    /// LIFO order. Returns the removed action.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyLog`] when there is nothing to undo, plus the
    /// usual lifecycle errors.
    #[instrument(skip(self))]
    pub fn undo_last_move(&mut self) -> Result<Action, GameError> {
        self.require_active()?;
        let action = self.log.pop().ok_or(GameError::EmptyLog)?;
        let team = self
            .roster
            .team_of(*action.actor())
            .expect("logged actor holds a seat");
        self.score.subtract(team, rules::points(action.event()));
        info!(%action, score = %self.score, "Move undone");
        Ok(action)
    }

    /// Ends the match if there is a strict winner.
    ///
    /// On success the session transitions irreversibly to
    /// [`Phase::Finished`] and the winning team is returned.
    ///
    /// # Errors
    ///
    /// [`GameError::TiedGame`] when scores are level; the session stays
    /// active and more moves must be recorded or undone first.
    #[instrument(skip(self))]
    pub fn attempt_finish(&mut self) -> Result<Team, GameError> {
        self.require_active()?;
        let winner = self.score.leader().ok_or(GameError::TiedGame)?;
        self.phase = Phase::Finished;
        self.winner = Some(winner);
        info!(%winner, score = %self.score, moves = self.log.len(), "Match finished");
        Ok(winner)
    }

    fn require_active(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Active => Ok(()),
            Phase::Setup => Err(GameError::RosterIncomplete),
            Phase::Finished => Err(GameError::SessionClosed),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score pair.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The seating for this match.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Ordered history of recorded moves.
    pub fn moves(&self) -> &MoveLog {
        &self.log
    }

    /// The winning team, once the match has finished.
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// The team the player is seated on, if any.
    pub fn team_of(&self, player: PlayerId) -> Option<Team> {
        self.roster.team_of(player)
    }

    /// Re-derives the score from scratch by walking the move log.
    ///
    /// Always equal to [`GameSession::score`]; used as a consistency
    /// check in tests.
    pub fn recomputed_score(&self) -> Score {
        let mut score = Score::default();
        for action in &self.log {
            if let Some(team) = self.roster.team_of(*action.actor()) {
                score.add(team, rules::points(action.event()));
            }
        }
        score
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
