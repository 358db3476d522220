use thiserror::Error;

/// Errors returned by Roster storage adapters and the database handle.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
