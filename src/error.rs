use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Insufficient Data: {0}")]
    InsufficientData(String),

    #[error("Ciphertext contains no letters to score")]
    EmptyCiphertext,

    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("Invalid Model: {0}")]
    InvalidModel(String),
}

pub type CipherResult<T> = Result<T, CipherError>;
