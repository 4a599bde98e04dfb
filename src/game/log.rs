//! The ordered, undo-capable history of moves for one match.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::game::PlayerId;

/// One recorded event performed by one player.
///
/// The display name is snapshotted when the move is recorded, so the log
/// stays readable even if the player record changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Action {
    actor: PlayerId,
    actor_name: String,
    event: String,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} performed: {}", self.actor_name, self.event)
    }
}

/// Ordered sequence of [`Action`]s, mutated only by append and undo.
///
/// Iteration is in recording order. The session keeps the log consistent
/// with the score: every action currently in the log has been reflected
/// in the score exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    actions: Vec<Action>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action. Only the session records moves.
    pub(crate) fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Removes and returns the most recent action, if any.
    pub(crate) fn pop(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the log holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The most recently recorded action, if any.
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Iterates over actions in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// All actions in recording order.
    pub fn all(&self) -> &[Action] {
        &self.actions
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
