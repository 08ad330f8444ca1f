use thiserror::Error;

use epi_policy::PolicyError;
use epi_progression::ProgressionError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

pub type SimResult<T> = Result<T, SimError>;
