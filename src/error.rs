use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the overlap engine: reading settings, decoding
/// widget payloads and validating user input. The engine itself has none.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("payload decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid UTC offset {0}")]
    InvalidOffset(String),

    #[error("invalid city {0}")]
    InvalidCity(String),

    #[error("invalid hour {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("missing field in payload: {0}")]
    MissingField(&'static str),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
