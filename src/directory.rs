//! Player directory interface consumed by the core.

use crate::game::PlayerId;

/// Existence and naming lookups for player records.
///
/// The core never owns player data; it holds identifiers and asks the
/// directory for display names when snapshotting actions. The storage
/// layer provides the real implementation; tests use stubs.
pub trait PlayerDirectory {
    /// Whether a player record exists for the identifier.
    fn exists(&self, player: PlayerId) -> bool;

    /// The player's display name, or `None` if the record is gone.
    fn name_of(&self, player: PlayerId) -> Option<String>;
}
