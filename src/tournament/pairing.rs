use log::debug;

use super::standings::compute_standings;
use super::types::{Pairing, StandingRow};
use crate::database::DbConn;
use crate::errors::{TournamentError, TournamentResult};

/// Pairings for the next round, derived from the current standings.
pub fn generate_pairings(conn: &mut DbConn) -> TournamentResult<Vec<Pairing>> {
    let standings = compute_standings(conn)?;
    pair_adjacent(&standings)
}

/// Pairs each player with the neighbour below them in the ranking: rank 1 with
/// rank 2, rank 3 with rank 4, and so on.
pub fn pair_adjacent(standings: &[StandingRow]) -> TournamentResult<Vec<Pairing>> {
    validate_player_count(standings.len())?;

    let (upper, lower): (Vec<_>, Vec<_>) = standings
        .iter()
        .enumerate()
        .partition(|(idx, _)| idx % 2 == 0);

    let pairings: Vec<Pairing> = upper
        .into_iter()
        .zip(lower)
        .map(|((_, first), (_, second))| Pairing::new(first, second))
        .collect();

    debug!("Paired {} players into {} matches", standings.len(), pairings.len());
    Ok(pairings)
}

fn validate_player_count(count: usize) -> TournamentResult<()> {
    if count < 2 {
        return Err(TournamentError::InvalidTournamentState(
            "at least one pair required".to_string(),
        ));
    }
    // Zipping an odd count would silently leave the last player out.
    if count % 2 != 0 {
        return Err(TournamentError::InvalidTournamentState(format!(
            "cannot pair an odd number of players ({count})"
        )));
    }
    Ok(())
}
