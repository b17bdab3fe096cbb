use anyhow::{Context, Result};

use super::connection::DbConn;

const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Creates any missing tables and indexes. Safe to run on every start.
pub fn initialize_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    run_statements(conn, schema_sql)?;

    log::debug!("Database schema initialized");
    Ok(())
}

/// Drops both tables and recreates them empty.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    run_statements(conn, DROP_SQL)?;
    initialize_schema(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn run_statements(conn: &mut DbConn, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
