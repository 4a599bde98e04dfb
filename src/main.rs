//! Beer Die - scorekeeper and stat tracker binary.

use anyhow::{Context, Result};
use clap::Parser;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

use beer_die::cli::{Cli, Command};
use beer_die::{StatsRepository, StatsService, console};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    run_migrations(&cli.db_path)?;
    let repository = StatsRepository::new(cli.db_path.clone())?;
    let service = StatsService::new(repository);

    match cli.command {
        Command::Play => console::play(&service),
        Command::Add { name } => console::add_player(&service, name),
        Command::Remove { id } => console::remove_player(&service, id),
        Command::List => console::list_players(&service),
        Command::Stats { id } => console::show_stats(&service, id),
    }
}

/// Applies any pending schema migrations to the database.
fn run_migrations(db_path: &str) -> Result<()> {
    let mut conn = SqliteConnection::establish(db_path)
        .with_context(|| format!("connecting to '{db_path}'"))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("running migrations: {e}"))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "Applied pending migrations");
    }
    Ok(())
}
