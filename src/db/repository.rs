//! Database repository for player records and stat commits.

use diesel::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::catalog::CounterKey;
use crate::db::schema::players;
use crate::db::{DbError, NewPlayer, PlayerRow};
use crate::directory::PlayerDirectory;
use crate::game::{Outcome, PersistenceOp, PlayerId};

/// Repository over the stats database.
///
/// Holds the database path and opens a connection per operation; the
/// application is single-operator and synchronous, so there is no pool.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    db_path: String,
}

impl StatsRepository {
    /// Creates a new repository for the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating StatsRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Registers a new player.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn create_player(&self, name: String) -> Result<PlayerRow, DbError> {
        debug!(name = %name, "Creating player");
        let mut conn = self.connection()?;

        let player = diesel::insert_into(players::table)
            .values(&NewPlayer::new(name))
            .returning(PlayerRow::as_returning())
            .get_result(&mut conn)?;

        info!(player_id = player.id(), name = %player.name(), "Player created");
        Ok(player)
    }

    /// Deletes a player record. Returns `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn delete_player(&self, player: PlayerId) -> Result<bool, DbError> {
        debug!(player, "Deleting player");
        let mut conn = self.connection()?;

        let removed =
            diesel::delete(players::table.filter(players::id.eq(player))).execute(&mut conn)?;

        if removed > 0 {
            info!(player, "Player deleted");
        } else {
            warn!(player, "Delete matched no player");
        }
        Ok(removed > 0)
    }

    /// Gets a player by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_player(&self, player: PlayerId) -> Result<Option<PlayerRow>, DbError> {
        debug!(player, "Looking up player");
        let mut conn = self.connection()?;

        let row = players::table
            .filter(players::id.eq(player))
            .first::<PlayerRow>(&mut conn)
            .optional()?;

        Ok(row)
    }

    /// Lists all players, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_players(&self) -> Result<Vec<PlayerRow>, DbError> {
        debug!("Listing players");
        let mut conn = self.connection()?;

        let rows = players::table
            .order(players::id.asc())
            .load::<PlayerRow>(&mut conn)?;

        info!(count = rows.len(), "Players loaded");
        Ok(rows)
    }

    /// Lists players not in `exclude`, ordered by id.
    ///
    /// Used during seating to show who is still available for a match.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn available_players(&self, exclude: &[PlayerId]) -> Result<Vec<PlayerRow>, DbError> {
        debug!(excluded = exclude.len(), "Listing available players");
        let mut conn = self.connection()?;

        let rows = players::table
            .filter(players::id.ne_all(exclude.to_vec()))
            .order(players::id.asc())
            .load::<PlayerRow>(&mut conn)?;

        Ok(rows)
    }

    /// Number of registered players.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn count_players(&self) -> Result<i64, DbError> {
        let mut conn = self.connection()?;
        let count = players::table.count().get_result::<i64>(&mut conn)?;
        Ok(count)
    }

    /// Applies a finalization batch inside a single immediate transaction.
    ///
    /// All-or-nothing: a failure anywhere rolls back every increment,
    /// outcome, and totals refresh in the batch.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if any statement in the batch fails.
    #[instrument(skip(self, ops), fields(ops = ops.len()))]
    pub fn apply(&self, ops: &[PersistenceOp]) -> Result<(), DbError> {
        debug!("Applying persistence batch");
        let mut conn = self.connection()?;

        conn.immediate_transaction::<_, DbError, _>(|conn| {
            for op in ops {
                match op {
                    PersistenceOp::IncrementCounter {
                        player,
                        counter,
                        amount,
                    } => {
                        Self::increment_counter(conn, *player, *counter, *amount)?;
                    }
                    PersistenceOp::RecordOutcome { player, outcome } => {
                        Self::record_outcome(conn, *player, *outcome)?;
                    }
                    PersistenceOp::RecomputeTotals { player } => {
                        Self::recompute_totals(conn, *player)?;
                    }
                }
            }
            Ok(())
        })?;

        info!(ops = ops.len(), "Persistence batch committed");
        Ok(())
    }

    fn increment_counter(
        conn: &mut SqliteConnection,
        player: PlayerId,
        counter: CounterKey,
        amount: i32,
    ) -> QueryResult<usize> {
        let target = diesel::update(players::table.filter(players::id.eq(player)));
        match counter {
            CounterKey::Airballs => target
                .set(players::airballs.eq(players::airballs + amount))
                .execute(conn),
            CounterKey::TooShorts => target
                .set(players::too_shorts.eq(players::too_shorts + amount))
                .execute(conn),
            CounterKey::TableHits => target
                .set(players::table_hits.eq(players::table_hits + amount))
                .execute(conn),
            CounterKey::CupHits => target
                .set(players::cup_hits.eq(players::cup_hits + amount))
                .execute(conn),
            CounterKey::Pts1 => target
                .set(players::pts1.eq(players::pts1 + amount))
                .execute(conn),
            CounterKey::Pts2 => target
                .set(players::pts2.eq(players::pts2 + amount))
                .execute(conn),
            CounterKey::Sinks => target
                .set(players::sinks.eq(players::sinks + amount))
                .execute(conn),
            CounterKey::Catch1s => target
                .set(players::catch1s.eq(players::catch1s + amount))
                .execute(conn),
            CounterKey::Catch2s => target
                .set(players::catch2s.eq(players::catch2s + amount))
                .execute(conn),
            CounterKey::Drop1s => target
                .set(players::drop1s.eq(players::drop1s + amount))
                .execute(conn),
            CounterKey::Drop2s => target
                .set(players::drop2s.eq(players::drop2s + amount))
                .execute(conn),
            CounterKey::FifaFails => target
                .set(players::fifa_fails.eq(players::fifa_fails + amount))
                .execute(conn),
            CounterKey::FifaSuccs => target
                .set(players::fifa_succs.eq(players::fifa_succs + amount))
                .execute(conn),
        }
    }

    fn record_outcome(
        conn: &mut SqliteConnection,
        player: PlayerId,
        outcome: Outcome,
    ) -> QueryResult<usize> {
        let target = diesel::update(players::table.filter(players::id.eq(player)));
        match outcome {
            Outcome::Win => target
                .set(players::wins.eq(players::wins + 1))
                .execute(conn),
            Outcome::Loss => target
                .set(players::losses.eq(players::losses + 1))
                .execute(conn),
        }
    }

    /// Refreshes the derived totals from their source counters, keeping
    /// a single source of truth per fact.
    fn recompute_totals(conn: &mut SqliteConnection, player: PlayerId) -> QueryResult<()> {
        diesel::update(players::table.filter(players::id.eq(player)))
            .set(players::games.eq(players::wins + players::losses))
            .execute(conn)?;

        diesel::update(players::table.filter(players::id.eq(player)))
            .set(players::tosses.eq(players::airballs
                + players::too_shorts
                + players::table_hits
                + players::cup_hits
                + players::pts1
                + players::pts2
                + players::sinks))
            .execute(conn)?;

        diesel::update(players::table.filter(players::id.eq(player)))
            .set(players::tosses_defended.eq(players::catch1s
                + players::catch2s
                + players::drop1s
                + players::drop2s
                + players::fifa_fails
                + players::fifa_succs))
            .execute(conn)?;

        Ok(())
    }
}

impl PlayerDirectory for StatsRepository {
    fn exists(&self, player: PlayerId) -> bool {
        match self.get_player(player) {
            Ok(row) => row.is_some(),
            Err(e) => {
                warn!(player, error = %e, "Existence check failed");
                false
            }
        }
    }

    fn name_of(&self, player: PlayerId) -> Option<String> {
        match self.get_player(player) {
            Ok(row) => row.map(|r| r.name().clone()),
            Err(e) => {
                warn!(player, error = %e, "Name lookup failed");
                None
            }
        }
    }
}
