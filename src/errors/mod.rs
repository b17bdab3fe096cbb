use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// The current player set cannot produce a valid round
    #[error("Invalid tournament state: {0}")]
    InvalidTournamentState(String),

    /// Store or connection failure, passed through unchanged
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;
