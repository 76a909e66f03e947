use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Malformed run sequence at element {index}: {reason}")]
    MalformedRuns { index: usize, reason: String },
    #[error("Invalid override key {key:?}")]
    InvalidOverrideKey { key: String },
    #[error("Unexpected dataset shape: expected {expected}")]
    UnexpectedShape { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
