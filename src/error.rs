use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),

    #[error("failed to write benchmark output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
