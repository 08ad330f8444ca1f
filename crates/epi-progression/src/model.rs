//! The `TransitionModel` trait — the progression engine's extension point.

use epi_core::{Day, PersonId, PersonRng};
use epi_person::{DiseaseStatus, PersonStore};

/// Pluggable per-day disease-status decision.
///
/// Implementations decide, for one person on one day, which status the
/// person holds tomorrow.  All methods receive a read-only [`PersonStore`]
/// and a mutable per-person [`PersonRng`] so decisions are deterministic
/// regardless of thread ordering.
///
/// # Required methods
///
/// Only [`decide_next_state`][Self::decide_next_state] is required.  The
/// three factor hooks default to a constant `1.0` multiplier; refinements
/// override them instead of inlining constants into the decision rules, so
/// calibration work composes.
///
/// # Contract
///
/// - Called once per person per day while that person's status satisfies
///   [`DiseaseStatus::needs_transition`].
/// - Must be a pure function of `(store snapshot, day, RNG stream)`: no
///   interior mutability, no I/O.
/// - A call for a status the model has no rule for is a programming error
///   and must panic, not silently default.
///
/// # Thread safety
///
/// The simulation loop may evaluate many persons in parallel via Rayon, so
/// implementations must be `Send + Sync`.  Per-person state lives in the
/// store, never in the model itself.
pub trait TransitionModel: Send + Sync {
    /// Decide the next status for `person`, currently holding a
    /// non-terminal, non-susceptible status.
    fn decide_next_state(
        &self,
        person: PersonId,
        store:  &PersonStore,
        day:    Day,
        rng:    &mut PersonRng,
    ) -> DiseaseStatus;

    /// Multiplier on the `Contagious → ShowingSymptoms` probability.
    fn showing_symptoms_factor(&self, _person: PersonId, _store: &PersonStore, _day: Day) -> f64 {
        1.0
    }

    /// Multiplier on the `ShowingSymptoms → SeriouslySick` probability.
    fn seriously_sick_factor(&self, _person: PersonId, _store: &PersonStore, _day: Day) -> f64 {
        1.0
    }

    /// Multiplier on the `SeriouslySick → Critical` probability.
    fn critical_factor(&self, _person: PersonId, _store: &PersonStore, _day: Day) -> f64 {
        1.0
    }
}
