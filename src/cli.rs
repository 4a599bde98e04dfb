//! Command-line interface for the beer die scorekeeper.

use clap::{Parser, Subcommand};

use crate::game::PlayerId;

/// Beer Die - scorekeeper and stat tracker
#[derive(Parser, Debug)]
#[command(name = "beer_die")]
#[command(about = "Score beer die matches and track player statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the stats database (created on first run)
    #[arg(long, default_value = "beer_die.db")]
    pub db_path: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an interactive match
    Play,

    /// Register a new player
    Add {
        /// Display name for the new player
        name: String,
    },

    /// Delete a player
    Remove {
        /// Id of the player to delete
        id: PlayerId,
    },

    /// List registered players
    List,

    /// Show a player's stat sheet
    Stats {
        /// Id of the player to show
        id: PlayerId,
    },
}
