use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid wagon spec '{0}': expected ID:PASSENGERS")]
    InvalidWagonSpec(String),

    #[error("invalid interval: {0}")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, ConsistError>;
