//! Incidence-triggered lockdown/reopen policy with hysteresis.
//!
//! # Control loop
//!
//! Each day the cumulative symptomatic rate per 100k is appended to a
//! dated series.  Over the trailing `INTERVAL_DAYS + 6` days, the 7-day
//! incidence is derived as `inc[d+7] = rate[d+7] − rate[d]` for every pair
//! of dates present; fewer than 7 days of data yield no pairs, and the day
//! is a no-op (warm-up).
//!
//! The two regime edges are deliberately asymmetric:
//!
//! - **Open → Lockdown** looks only at the single most recent incidence
//!   value (fast to enter);
//! - **Lockdown → Open** requires *every* incidence value across the
//!   trailing window to sit at or below the open trigger (slow to exit).
//!
//! One spike during an otherwise-low window therefore blocks reopening,
//! which is what keeps the controller from oscillating around a single
//! threshold.

use std::collections::BTreeMap;

use epi_core::SimDate;

use crate::controller::{PolicyController, Regime};
use crate::registry::RestrictionRegistry;
use crate::report::DailyReport;
use crate::schedule::{AdaptivePolicyConfig, RestrictionSchedule};

/// Days the incidence has to stay at or below the open trigger before
/// restrictions lift.
const INTERVAL_DAYS: i32 = 14;

/// The adaptive [`PolicyController`].
pub struct AdaptivePolicy {
    lockdown_trigger: f64,
    open_trigger: f64,
    lockdown_policy: RestrictionSchedule,
    open_policy: RestrictionSchedule,

    /// Cumulative symptomatic rate per 100k, by report date.
    cum_rate: BTreeMap<SimDate, f64>,
    in_lockdown: bool,
}

impl AdaptivePolicy {
    pub fn new(config: AdaptivePolicyConfig) -> Self {
        Self {
            lockdown_trigger: config.lockdown_trigger,
            open_trigger: config.open_trigger,
            lockdown_policy: config.lockdown_policy,
            open_policy: config.open_policy,
            cum_rate: BTreeMap::new(),
            in_lockdown: false,
        }
    }

    /// 7-day incidence per window end date, over the trailing
    /// `INTERVAL_DAYS + 6`-day slice of the rate series.
    fn trailing_incidence(&self, today: SimDate) -> BTreeMap<SimDate, f64> {
        let window_start = today.minus_days(INTERVAL_DAYS + 6);
        let mut incidence = BTreeMap::new();

        for (&from, &rate_from) in self.cum_rate.range(window_start..) {
            let until = from.plus_days(7);
            match self.cum_rate.get(&until) {
                Some(&rate_until) => {
                    incidence.insert(until, rate_until - rate_from);
                }
                // Report dates are contiguous: once one `until` is absent,
                // all later ones are too.
                None => break,
            }
        }
        incidence
    }
}

impl PolicyController for AdaptivePolicy {
    fn update(&mut self, report: &DailyReport, registry: &mut RestrictionRegistry) {
        let today = report.date;
        self.cum_rate.insert(today, report.incidence_per_100k());

        let incidence = self.trailing_incidence(today);

        // Warm-up: for the first 7 days restrictions stay as they are.
        if incidence.is_empty() {
            return;
        }

        if self.in_lockdown {
            if incidence.values().all(|&inc| inc <= self.open_trigger) {
                registry.apply_before(today, &self.open_policy);
                self.in_lockdown = false;
                log::info!("{today}: incidence at or below {} for the whole window, reopening", self.open_trigger);
            }
        } else if let Some((_, &latest)) = incidence.last_key_value() {
            if latest >= self.lockdown_trigger {
                registry.apply_before(today, &self.lockdown_policy);
                self.in_lockdown = true;
                log::info!("{today}: 7-day incidence {latest:.1} reached {}, entering lockdown", self.lockdown_trigger);
            }
        }
    }

    fn regime(&self) -> Regime {
        if self.in_lockdown { Regime::Lockdown } else { Regime::Open }
    }
}
