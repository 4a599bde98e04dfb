//! Database persistence layer for player records and game statistics.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{NewPlayer, PlayerRow};
pub use repository::StatsRepository;
