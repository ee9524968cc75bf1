use thiserror::Error;

use crate::types::RoundName;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A clue in a scored round was never revealed on air.
    #[error("Show #{show_number} is incomplete: unrevealed clue in {round}")]
    IncompleteGame { show_number: String, round: RoundName },

    #[error(
        "Show #{show_number}: cannot infer Daily Double value in '{category}' ({round}), \
         {daily_doubles} Daily Double(s) but only {missing} canonical value(s) missing"
    )]
    AmbiguousDailyDouble {
        show_number: String,
        round: RoundName,
        category: String,
        daily_doubles: usize,
        missing: usize,
    },

    #[error("Round {0} cannot be transformed as a board round")]
    InvalidRound(String),

    #[error("Malformed show listing: {0}")]
    MalformedListing(String),

    #[error("API error: {message}")]
    Api { message: String },
}

impl ConverterError {
    /// True for the one per-show error that counts as a skip rather than a failure.
    pub fn is_incomplete_game(&self) -> bool {
        matches!(self, ConverterError::IncompleteGame { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
