use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("progression configuration error: {0}")]
    Config(String),
}

pub type ProgressionResult<T> = Result<T, ProgressionError>;
