use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid handicap index {0}: must be between -10.0 and 54.0")]
    InvalidHandicapIndex(f64),

    #[error("Invalid allowance {0}: must be in (0, 1]")]
    InvalidAllowance(f64),

    #[error("Invalid stroke index table: {0}")]
    InvalidStrokeIndexTable(String),

    #[error("Match play handicap requires the lowest playing handicap of the group")]
    MissingGroupContext,

    #[error("Ghost handicap requires a reference round")]
    MissingGhostReference,

    #[error("Unknown {kind}: {name}")]
    UnknownPolicy { kind: &'static str, name: String },

    #[error("Invalid hole score: {0}")]
    InvalidHoleScore(String),

    #[error("Round file error: {0}")]
    RoundFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
