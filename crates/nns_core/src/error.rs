use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
