pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::{generate_pairings, pair_adjacent};
pub use standings::{compute_standings, rank_standings};
pub use types::{Pairing, PlayerId, StandingRow};
