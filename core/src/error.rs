use crate::types::CrewSize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid '{table}' table: {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("unsupported crew size {crew}: no service-time table configured")]
    UnsupportedCrewSize { crew: CrewSize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
