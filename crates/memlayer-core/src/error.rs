use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid memory ID: {0}")]
    InvalidId(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
