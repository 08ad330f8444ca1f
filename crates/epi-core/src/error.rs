//! Workspace error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EpiError` via `From` impls, or keep them separate and wrap `EpiError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.
//!
//! Programmer errors — a state transition requested from a status the model
//! has no rule for — are deliberately NOT represented here: they panic at
//! the call site, since they indicate an inconsistency in the model wiring
//! rather than a recoverable condition.

use thiserror::Error;

use crate::PersonId;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
