//! Database models for player records and their counters.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use strum::IntoEnumIterator;

use crate::catalog::CounterKey;
use crate::db::schema;

/// Player database model: identity plus every persisted counter.
///
/// `tosses`, `tosses_defended`, and `games` are derived totals refreshed
/// by the store during finalization; they are never incremented directly.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::players)]
pub struct PlayerRow {
    id: i32,
    name: String,
    airballs: i32,
    too_shorts: i32,
    table_hits: i32,
    cup_hits: i32,
    pts1: i32,
    pts2: i32,
    sinks: i32,
    catch1s: i32,
    catch2s: i32,
    drop1s: i32,
    drop2s: i32,
    fifa_fails: i32,
    fifa_succs: i32,
    tosses: i32,
    tosses_defended: i32,
    wins: i32,
    losses: i32,
    games: i32,
    created_at: NaiveDateTime,
}

impl PlayerRow {
    /// The stored value of one event counter.
    pub fn counter(&self, key: CounterKey) -> i32 {
        match key {
            CounterKey::Airballs => self.airballs,
            CounterKey::TooShorts => self.too_shorts,
            CounterKey::TableHits => self.table_hits,
            CounterKey::CupHits => self.cup_hits,
            CounterKey::Pts1 => self.pts1,
            CounterKey::Pts2 => self.pts2,
            CounterKey::Sinks => self.sinks,
            CounterKey::Catch1s => self.catch1s,
            CounterKey::Catch2s => self.catch2s,
            CounterKey::Drop1s => self.drop1s,
            CounterKey::Drop2s => self.drop2s,
            CounterKey::FifaFails => self.fifa_fails,
            CounterKey::FifaSuccs => self.fifa_succs,
        }
    }

    /// Labelled stat lines for display, counters first, then the
    /// derived totals and the win/loss record.
    pub fn stat_lines(&self) -> Vec<(&'static str, i32)> {
        let mut lines: Vec<(&'static str, i32)> = CounterKey::iter()
            .map(|key| (key.description(), self.counter(key)))
            .collect();
        lines.push(("Tosses", self.tosses));
        lines.push(("Tosses defended", self.tosses_defended));
        lines.push(("Wins", self.wins));
        lines.push(("Losses", self.losses));
        lines.push(("Games played", self.games));
        lines
    }
}

/// Insertable model for registering a new player.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::players)]
pub struct NewPlayer {
    name: String,
}
