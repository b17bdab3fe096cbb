use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{Match, WinLossTotals};

pub fn insert_match(conn: &mut DbConn, winner_id: i32, loser_id: i32) -> Result<Match> {
    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2) RETURNING id, winner_id, loser_id, created_at";

    conn.query_row(sql, params![winner_id, loser_id], parse_match_row)
        .with_context(|| format!("Failed to insert match {} beat {}", winner_id, loser_id))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner_id, loser_id, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_losses_for_player(conn: &mut DbConn, player_id: i32) -> Result<u32> {
    let sql = "SELECT COUNT(*) FROM matches WHERE loser_id = ?1";
    conn.query_row(sql, params![player_id], |row| row.get(0))
        .context("Failed to count losses for player")
}

/// Per-player win count and matches played. Players without any match are
/// kept by the outer joins and reported with zero totals.
pub fn query_win_loss_totals(conn: &mut DbConn) -> Result<Vec<WinLossTotals>> {
    let sql = "
        SELECT
            p.id,
            p.name,
            COALESCE(w.wins, 0) AS wins,
            COALESCE(w.wins, 0) + COALESCE(l.losses, 0) AS total
        FROM players p
        LEFT JOIN (
            SELECT winner_id AS player_id, COUNT(*) AS wins FROM matches GROUP BY winner_id
        ) w ON w.player_id = p.id
        LEFT JOIN (
            SELECT loser_id AS player_id, COUNT(*) AS losses FROM matches GROUP BY loser_id
        ) l ON l.player_id = p.id
        ORDER BY wins DESC, p.id ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(WinLossTotals {
                player_id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                total_matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to query win/loss totals")?;

    Ok(rows)
}
