//! Player management business logic layer.

use tracing::{debug, info, instrument};

use crate::db::{DbError, PlayerRow, StatsRepository};
use crate::game::{PersistenceOp, PlayerId, ROSTER_SIZE};

/// Service layer over the repository.
///
/// Wraps [`StatsRepository`] with the higher-level operations the
/// console needs: player management, seating pools, and committing a
/// finalized match.
#[derive(Debug, Clone)]
pub struct StatsService {
    repository: StatsRepository,
}

impl StatsService {
    /// Creates a new service backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: StatsRepository) -> Self {
        info!("Creating StatsService");
        Self { repository }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &StatsRepository {
        &self.repository
    }

    /// Registers a new player with the given display name.
    #[instrument(skip(self))]
    pub fn add_player(&self, name: String) -> Result<PlayerRow, DbError> {
        debug!(name = %name, "Adding player");
        self.repository.create_player(name)
    }

    /// Removes a player, returning the removed record if it existed.
    #[instrument(skip(self))]
    pub fn remove_player(&self, player: PlayerId) -> Result<Option<PlayerRow>, DbError> {
        debug!(player, "Removing player");
        let row = self.repository.get_player(player)?;
        if row.is_some() {
            self.repository.delete_player(player)?;
        }
        Ok(row)
    }

    /// All registered players, ordered by id.
    #[instrument(skip(self))]
    pub fn players(&self) -> Result<Vec<PlayerRow>, DbError> {
        self.repository.list_players()
    }

    /// A player's full record, if it exists.
    #[instrument(skip(self))]
    pub fn player(&self, player: PlayerId) -> Result<Option<PlayerRow>, DbError> {
        self.repository.get_player(player)
    }

    /// Players not yet seated in the match being set up.
    #[instrument(skip(self))]
    pub fn seating_pool(&self, seated: &[PlayerId]) -> Result<Vec<PlayerRow>, DbError> {
        self.repository.available_players(seated)
    }

    /// Whether enough players are registered to fill a roster.
    #[instrument(skip(self))]
    pub fn can_start_match(&self) -> Result<bool, DbError> {
        let count = self.repository.count_players()?;
        debug!(count, needed = ROSTER_SIZE, "Checked player count");
        Ok(count >= ROSTER_SIZE as i64)
    }

    /// Commits a finalized match by applying its batch atomically.
    #[instrument(skip(self, ops), fields(ops = ops.len()))]
    pub fn commit_game(&self, ops: &[PersistenceOp]) -> Result<(), DbError> {
        info!(ops = ops.len(), "Committing finalized match");
        self.repository.apply(ops)
    }
}
