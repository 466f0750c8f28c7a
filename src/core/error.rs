use thiserror::Error;

#[derive(Error, Debug)]
pub enum NluError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NluError>;
