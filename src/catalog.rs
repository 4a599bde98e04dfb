//! Event catalog: human-readable action names and their counters.
//!
//! The catalog is the lookup the core consumes when validating moves
//! and when finalizing a match: each recognized event maps to the
//! persisted counter it feeds. Scoring itself lives in
//! [`crate::game::points`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Persisted per-player counter fed by one kind of event.
///
/// Offense counters roll up into the `tosses` total; defense counters
/// roll up into `tosses_defended`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum CounterKey {
    /// Tosses that missed the table entirely.
    Airballs,
    /// Tosses that came up short of the table.
    TooShorts,
    /// Tosses that hit the table but did not score.
    TableHits,
    /// Tosses that struck a cup without sinking.
    CupHits,
    /// One-point scoring tosses.
    Pts1,
    /// Two-point scoring tosses.
    Pts2,
    /// Sunk tosses.
    Sinks,
    /// One-hand catches on defense.
    Catch1s,
    /// Two-hand catches on defense.
    Catch2s,
    /// One-hand drops on defense.
    Drop1s,
    /// Two-hand drops on defense.
    Drop2s,
    /// Failed fifa attempts.
    FifaFails,
    /// Successful fifa attempts.
    FifaSuccs,
}

impl CounterKey {
    /// Whether this counter feeds the offensive `tosses` total.
    pub fn is_offense(self) -> bool {
        matches!(
            self,
            Self::Airballs
                | Self::TooShorts
                | Self::TableHits
                | Self::CupHits
                | Self::Pts1
                | Self::Pts2
                | Self::Sinks
        )
    }

    /// Human label for stat sheets.
    pub fn description(self) -> &'static str {
        match self {
            Self::Airballs => "Airballs",
            Self::TooShorts => "Too shorts",
            Self::TableHits => "Table hits",
            Self::CupHits => "Cup hits",
            Self::Pts1 => "1 pointers",
            Self::Pts2 => "2 pointers",
            Self::Sinks => "Sinks",
            Self::Catch1s => "One-hand catches",
            Self::Catch2s => "Two-hand catches",
            Self::Drop1s => "One-hand drops",
            Self::Drop2s => "Two-hand drops",
            Self::FifaFails => "Failed fifas",
            Self::FifaSuccs => "Successful fifas",
        }
    }
}

/// The recorded events of the game, with their display names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EventKind {
    /// Toss that missed the table.
    #[strum(serialize = "Airball")]
    Airball,
    /// Toss that came up short.
    #[strum(serialize = "Too Short")]
    TooShort,
    /// Toss that hit the table without scoring.
    #[strum(serialize = "Table Hit")]
    TableHit,
    /// Toss that struck a cup.
    #[strum(serialize = "Cup Hit")]
    CupHit,
    /// One-point score.
    #[strum(serialize = "1 Pointer")]
    OnePointer,
    /// Two-point score.
    #[strum(serialize = "2 Pointer")]
    TwoPointer,
    /// Sink, the three-point play.
    #[strum(serialize = "Sink")]
    Sink,
    /// Defensive catch with one hand.
    #[strum(serialize = "One-Hand Catch")]
    OneHandCatch,
    /// Defensive catch with two hands.
    #[strum(serialize = "Two-Hand Catch")]
    TwoHandCatch,
    /// Defensive drop off one hand.
    #[strum(serialize = "One-Hand Drop")]
    OneHandDrop,
    /// Defensive drop off two hands.
    #[strum(serialize = "Two-Hand Drop")]
    TwoHandDrop,
    /// Failed fifa attempt.
    #[strum(serialize = "Unsuccessful Fifa")]
    FifaFail,
    /// Successful fifa, worth a point.
    #[strum(serialize = "Successful Fifa")]
    FifaSuccess,
}

impl EventKind {
    /// The persisted counter this event feeds.
    pub fn counter(self) -> CounterKey {
        match self {
            Self::Airball => CounterKey::Airballs,
            Self::TooShort => CounterKey::TooShorts,
            Self::TableHit => CounterKey::TableHits,
            Self::CupHit => CounterKey::CupHits,
            Self::OnePointer => CounterKey::Pts1,
            Self::TwoPointer => CounterKey::Pts2,
            Self::Sink => CounterKey::Sinks,
            Self::OneHandCatch => CounterKey::Catch1s,
            Self::TwoHandCatch => CounterKey::Catch2s,
            Self::OneHandDrop => CounterKey::Drop1s,
            Self::TwoHandDrop => CounterKey::Drop2s,
            Self::FifaFail => CounterKey::FifaFails,
            Self::FifaSuccess => CounterKey::FifaSuccs,
        }
    }
}

/// Lookup from a typed-in action name to its event, case-insensitively.
pub trait EventCatalog {
    /// Resolves a name to an event, or `None` if unrecognized.
    fn resolve(&self, name: &str) -> Option<EventKind>;
}

/// The fixed catalog of the standard game.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl EventCatalog for StandardCatalog {
    fn resolve(&self, name: &str) -> Option<EventKind> {
        let name = name.trim();
        EventKind::iter().find(|kind| kind.to_string().eq_ignore_ascii_case(name))
    }
}
