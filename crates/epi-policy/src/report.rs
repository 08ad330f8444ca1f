//! The daily population-level report the policy loop consumes.

use epi_core::SimDate;

/// One day's epidemiological summary, produced by the reporting side of the
/// simulation and consumed by [`PolicyController::update`][crate::PolicyController::update].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyReport {
    /// Calendar date the report covers.
    pub date: SimDate,

    /// Persons that have *ever* shown symptoms up to and including this
    /// day (cumulative, monotone non-decreasing).
    pub n_showing_symptoms_cumulative: u64,

    /// Total population size.
    pub n_total: u64,
}

impl DailyReport {
    /// Cumulative symptomatic incidence normalized per 100,000 population.
    pub fn incidence_per_100k(&self) -> f64 {
        debug_assert!(self.n_total > 0, "report for an empty population");
        self.n_showing_symptoms_cumulative as f64 * (100_000.0 / self.n_total as f64)
    }
}
