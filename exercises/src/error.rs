use scanner_framework::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to format report")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
