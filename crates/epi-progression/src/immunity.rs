//! The injected immune-state collaborator.
//!
//! The antibody-kinetics model that turns a person's vaccination and
//! infection history into titer levels lives outside this workspace.  The
//! progression engine only needs its one summary query: a strain-specific,
//! person-specific positive scalar where larger means better protected.

use epi_core::PersonId;
use epi_person::{PersonStore, VirusStrain};

/// Strain-specific antibody-derived protection, supplied by an external
/// immune-state aggregator.
///
/// # Contract
///
/// - The returned factor must be positive and finite; it is monotonically
///   related to the person's antibody titer against `strain`.
/// - `beta` is the configured steepness of the titer-to-protection mapping
///   (see [`ProgressionConfig::beta`][crate::ProgressionConfig]).
/// - Must be pure and `Send + Sync` — it is queried from the parallel
///   decide phase.
pub trait ImmunityModel: Send + Sync {
    fn immunity_factor(
        &self,
        person: PersonId,
        store:  &PersonStore,
        strain: VirusStrain,
        beta:   f64,
    ) -> f64;
}

/// An [`ImmunityModel`] returning the same factor for everyone.
///
/// Use `UniformImmunity(1.0)` to wire the progression engine without an
/// antibody model (the residual-risk division becomes a no-op), or a
/// different constant to probe the model's sensitivity in tests.
pub struct UniformImmunity(pub f64);

impl ImmunityModel for UniformImmunity {
    #[inline]
    fn immunity_factor(
        &self,
        _person: PersonId,
        _store:  &PersonStore,
        _strain: VirusStrain,
        _beta:   f64,
    ) -> f64 {
        self.0
    }
}
