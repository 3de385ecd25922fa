use thiserror::Error;
use uuid::Uuid;

pub type EngageResult<T> = Result<T, EngageError>;

#[derive(Error, Debug)]
pub enum EngageError {
    #[error("Unknown segment: {0}")]
    UnknownSegment(String),

    #[error("Unknown strategy: {0} (expected ABM, AIDA, RACE or 7Ps)")]
    UnknownStrategy(String),

    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Invalid next-send date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid status: {0} (expected scheduled, ready, running, paused or completed)")]
    InvalidStatus(String),

    #[error("No automation rule matched idea {0:?}")]
    NoMatch(String),

    #[error("Campaign {0} not found")]
    NotFound(Uuid),

    #[error("Corrupt state file {path}: {detail}")]
    CorruptState { path: String, detail: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
