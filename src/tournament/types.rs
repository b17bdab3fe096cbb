use serde::Serialize;

use crate::database::WinLossTotals;

pub type PlayerId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingRow {
    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }
}

impl From<WinLossTotals> for StandingRow {
    fn from(totals: WinLossTotals) -> Self {
        Self {
            id: totals.player_id,
            name: totals.name,
            wins: totals.wins,
            matches_played: totals.total_matches,
        }
    }
}

/// Two players meeting in the next round. The first player is the higher ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &StandingRow, second: &StandingRow) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
