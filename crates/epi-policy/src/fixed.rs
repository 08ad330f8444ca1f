//! Date-driven schedule playback without feedback.

use epi_core::SimDate;

use crate::controller::PolicyController;
use crate::registry::RestrictionRegistry;
use crate::report::DailyReport;
use crate::schedule::FixedPolicyConfig;

/// A [`PolicyController`] that plays a single restriction schedule back by
/// calendar date, ignoring the epidemic entirely.
///
/// Used for replaying historically observed restrictions, and as the
/// baseline against which adaptive scenarios are compared.
pub struct FixedPolicy {
    config: FixedPolicyConfig,
}

impl FixedPolicy {
    pub fn new(config: FixedPolicyConfig) -> Self {
        Self { config }
    }
}

impl PolicyController for FixedPolicy {
    /// Fast-forward the schedule: everything dated on or before the start
    /// date is applied, so mid-timeline starts see the correct state.
    fn init(&mut self, start: SimDate, registry: &mut RestrictionRegistry) {
        registry.apply_before(start.plus_days(1), &self.config.schedule);
    }

    /// Apply exactly the entries dated today.
    fn update(&mut self, report: &DailyReport, registry: &mut RestrictionRegistry) {
        registry.apply_on(report.date, &self.config.schedule);
    }
}
