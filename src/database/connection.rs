use std::time::Duration;

use anyhow::{Context, Result};
use r2d2::Builder;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(database_path: &str, pool_size: u32) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(pool_builder().max_size(pool_size), manager)
}

/// Every in-memory connection is its own database, so the pool holds exactly
/// one connection and never recycles it.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());
    let builder = pool_builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None);
    build_pool(builder, manager)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn pool_builder() -> Builder<SqliteConnectionManager> {
    r2d2::Pool::builder().connection_timeout(CONNECTION_TIMEOUT)
}

fn build_pool(builder: Builder<SqliteConnectionManager>, manager: SqliteConnectionManager) -> Result<DbPool> {
    builder
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
