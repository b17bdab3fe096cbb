use log::debug;

use super::types::StandingRow;
use crate::database::{matches, DbConn};
use crate::errors::TournamentResult;

/// Returns one row per registered player, ranked by wins.
pub fn compute_standings(conn: &mut DbConn) -> TournamentResult<Vec<StandingRow>> {
    let totals = matches::query_win_loss_totals(conn)?;
    let standings = rank_standings(totals.into_iter().map(StandingRow::from).collect());

    debug!("Computed standings for {} players", standings.len());
    Ok(standings)
}

/// Sorts by wins descending. Equal win counts fall back to ascending id so the
/// order never depends on how the store returned the rows.
pub fn rank_standings(mut rows: Vec<StandingRow>) -> Vec<StandingRow> {
    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::fresh_connection;
    use crate::database::{matches, players};
    use crate::errors::TournamentError;
    use crate::tournament::generate_pairings;

    fn row(id: i32, wins: u32, matches_played: u32) -> StandingRow {
        StandingRow {
            id,
            name: format!("P{id}"),
            wins,
            matches_played,
        }
    }

    #[test]
    fn test_rank_orders_by_wins_then_id() {
        let ranked = rank_standings(vec![row(4, 1, 2), row(2, 0, 2), row(3, 2, 2), row(1, 1, 2)]);
        let ids: Vec<i32> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_new_players_all_zero() {
        let mut conn = fresh_connection();
        for name in ["Ann", "Ben", "Cid", "Dot", "Eve"] {
            players::insert_player(&mut conn, name).unwrap();
        }

        let standings = compute_standings(&mut conn).unwrap();

        assert_eq!(standings.len() as i64, players::count(&mut conn).unwrap());
        assert!(standings.iter().all(|r| r.wins == 0 && r.matches_played == 0));
    }

    #[test]
    fn test_matches_played_is_wins_plus_losses() {
        let mut conn = fresh_connection();
        let ids: Vec<i32> = ["Ann", "Ben", "Cid", "Dot"]
            .iter()
            .map(|n| players::insert_player(&mut conn, n).unwrap().id)
            .collect();
        matches::insert_match(&mut conn, ids[0], ids[1]).unwrap();
        matches::insert_match(&mut conn, ids[2], ids[3]).unwrap();
        matches::insert_match(&mut conn, ids[0], ids[2]).unwrap();
        matches::insert_match(&mut conn, ids[3], ids[1]).unwrap();

        let standings = compute_standings(&mut conn).unwrap();

        for standing in &standings {
            let losses = matches::count_losses_for_player(&mut conn, standing.id).unwrap();
            assert_eq!(standing.matches_played, standing.wins + losses);
            assert_eq!(standing.losses(), losses);
        }
        assert_eq!(standings[0].id, ids[0]);
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[3].id, ids[1]);
        assert_eq!(standings[3].matches_played, 2);
    }

    #[test]
    fn test_store_failure_is_passed_through() {
        let mut conn = fresh_connection();
        players::insert_player(&mut conn, "Ann").unwrap();
        players::insert_player(&mut conn, "Ben").unwrap();
        conn.execute_batch("DROP TABLE matches;").unwrap();

        let standings = compute_standings(&mut conn);
        assert!(matches!(standings, Err(TournamentError::Store(_))));

        let pairings = generate_pairings(&mut conn);
        assert!(matches!(pairings, Err(TournamentError::Store(_))));
    }
}
