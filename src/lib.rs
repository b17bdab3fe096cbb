pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod services;
pub mod tournament;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::TournamentService;

pub use crate::errors::{TournamentError, TournamentResult};
pub use crate::tournament::{Pairing, StandingRow};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_service(database: Option<&str>) -> Result<TournamentService> {
    let config = AppConfig::new().with_database_path(database);
    TournamentService::open(&config.database)
}

pub fn handle_init(database: Option<&str>) -> Result<()> {
    open_service(database)?.reset()?;
    println!("Tournament database initialized");
    Ok(())
}

pub fn handle_register(database: Option<&str>, name: &str) -> Result<()> {
    let player = open_service(database)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(database: Option<&str>, winner: i32, loser: i32) -> Result<()> {
    let service = open_service(database)?;
    let recorded = service.report_match(winner, loser)?;
    let winner = output::player_label(recorded.winner_id, service.player(recorded.winner_id)?.as_ref());
    let loser = output::player_label(recorded.loser_id, service.player(recorded.loser_id)?.as_ref());
    println!("Recorded match #{}: {} beat {}", recorded.id, winner, loser);
    Ok(())
}

pub fn handle_count(database: Option<&str>) -> Result<()> {
    println!("{}", open_service(database)?.count_players()?);
    Ok(())
}

pub fn handle_players(database: Option<&str>) -> Result<()> {
    let players = open_service(database)?.players()?;
    println!("{}", output::render_players(&players));
    Ok(())
}

pub fn handle_standings(database: Option<&str>, json: bool) -> Result<()> {
    let standings = open_service(database)?.player_standings()?;
    if json {
        println!("{}", output::to_json(&standings)?);
    } else {
        println!("{}", output::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_pairings(database: Option<&str>, json: bool) -> Result<()> {
    let pairings = open_service(database)?.swiss_pairings()?;
    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        println!("{}", output::render_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_delete_matches(database: Option<&str>) -> Result<()> {
    let removed = open_service(database)?.delete_matches()?;
    println!("Deleted {} matches", removed);
    Ok(())
}

pub fn handle_delete_players(database: Option<&str>) -> Result<()> {
    let removed = open_service(database)?.delete_players()?;
    println!("Deleted {} players", removed);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
