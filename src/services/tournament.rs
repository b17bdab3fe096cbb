use anyhow::Result;
use log::{debug, info};

use crate::config::settings::DatabaseSettings;
use crate::database::{self, DbConn, DbPool, Match, Player};
use crate::errors::TournamentResult;
use crate::tournament::{self, Pairing, PlayerId, StandingRow};

/// Tournament operations against a shared store. Every call checks out its own
/// pooled connection, which goes back to the pool when the call returns.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    /// Opens the configured database file, creating missing tables.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        info!("Opening tournament database at {}", settings.path);
        let pool = database::create_pool(&settings.path, settings.pool_size)?;
        Self::with_pool(pool)
    }

    /// Scratch store that lives as long as the service.
    pub fn in_memory() -> Result<Self> {
        Self::with_pool(database::create_memory_pool()?)
    }

    pub fn with_pool(pool: DbPool) -> Result<Self> {
        let service = Self { pool };
        database::setup::initialize_schema(&mut service.connection()?)?;
        Ok(service)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    pub fn reset(&self) -> Result<()> {
        database::setup::reset_database(&mut self.connection()?)
    }

    pub fn delete_matches(&self) -> Result<usize> {
        let removed = database::matches::delete_all(&mut self.connection()?)?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    pub fn delete_players(&self) -> Result<usize> {
        let removed = database::players::delete_all(&mut self.connection()?)?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    pub fn count_players(&self) -> Result<i64> {
        database::players::count(&mut self.connection()?)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = database::players::insert_player(&mut self.connection()?, name)?;
        info!("Registered player {} as #{}", player.name, player.id);
        Ok(player)
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let recorded = database::matches::insert_match(&mut self.connection()?, winner, loser)?;
        debug!("Recorded match #{}: {} beat {}", recorded.id, winner, loser);
        Ok(recorded)
    }

    pub fn player(&self, id: PlayerId) -> Result<Option<Player>> {
        database::players::find_by_id(&mut self.connection()?, id)
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        database::players::list_all(&mut self.connection()?)
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        database::matches::list_all(&mut self.connection()?)
    }

    pub fn losses_for(&self, player: PlayerId) -> Result<u32> {
        database::matches::count_losses_for_player(&mut self.connection()?, player)
    }

    pub fn player_standings(&self) -> TournamentResult<Vec<StandingRow>> {
        tournament::compute_standings(&mut self.connection()?)
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let pairings = tournament::generate_pairings(&mut self.connection()?)?;
        info!("Generated {} pairings for the next round", pairings.len());
        Ok(pairings)
    }
}
