use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

// Row of the win/loss aggregate query
#[derive(Debug, Clone, PartialEq)]
pub struct WinLossTotals {
    pub player_id: i32,
    pub name: String,
    pub wins: u32,
    pub total_matches: u32,
}
