use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error("Invalid hunt data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Hunt not found: {0}")]
    NotFound(String),
    #[error("Hunt is full: {0}")]
    HuntFull(String),
}
