use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament organizer")]
pub struct Cli {
    /// Path to the SQLite database (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate the players and matches tables
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Print the number of registered players
    Count,
    /// List registered players
    Players,
    /// Print current standings, ranked by wins
    Standings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    DeleteMatches,
    /// Remove all player records
    DeletePlayers,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
