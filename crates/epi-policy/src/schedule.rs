//! Dated restriction schedules and the policy-kind configuration.
//!
//! A policy is described by data, not by a class hierarchy: a
//! [`PolicyConfig`] is a closed set of kinds, each carrying its own typed
//! configuration, and schedules are assembled with free builder-style
//! calls:
//!
//! ```ignore
//! let lockdown = RestrictionSchedule::new()
//!     .restrict("2020-03-01".parse()?, Restriction::of(0.4), ["work", "leisure"])
//!     .restrict("2020-03-01".parse()?, Restriction::of_mask([(MaskType::N95, 0.9)]), ["pt"]);
//!
//! let policy = PolicyConfig::Adaptive(AdaptivePolicyConfig {
//!     lockdown_trigger: 50.0,
//!     open_trigger: 10.0,
//!     lockdown_policy: lockdown,
//!     open_policy: open,
//! });
//! ```

use std::collections::BTreeMap;

use epi_core::SimDate;

use crate::adaptive::AdaptivePolicy;
use crate::controller::PolicyController;
use crate::fixed::FixedPolicy;
use crate::restriction::Restriction;

// ── RestrictionSchedule ───────────────────────────────────────────────────────

/// Activity → (date → restriction overlay), both levels ordered.
///
/// Ordered maps keep overlay application deterministic: ascending date
/// iteration means the latest-dated entry wins when a whole historical
/// range is applied in one call.
#[derive(Clone, Debug, Default)]
pub struct RestrictionSchedule {
    entries: BTreeMap<String, BTreeMap<SimDate, Restriction>>,
}

impl RestrictionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add `restriction` under `date` for every activity in
    /// `activities`.
    #[must_use]
    pub fn restrict<I, S>(mut self, date: SimDate, restriction: Restriction, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for activity in activities {
            self.add(activity.into(), date, restriction.clone());
        }
        self
    }

    /// Add one dated overlay.  A second overlay for the same activity and
    /// date merges onto the first.
    pub fn add(&mut self, activity: String, date: SimDate, restriction: Restriction) {
        self.entries
            .entry(activity)
            .or_default()
            .entry(date)
            .and_modify(|existing| existing.merge(&restriction))
            .or_insert(restriction);
    }

    /// Dated overlays for one activity, ascending by date.
    pub fn get(&self, activity: &str) -> Option<&BTreeMap<SimDate, Restriction>> {
        self.entries.get(activity)
    }

    /// Iterate `(activity, dated overlays)` in activity order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<SimDate, Restriction>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Policy kinds ──────────────────────────────────────────────────────────────

/// Configuration of an [`AdaptivePolicy`]: two incidence thresholds and the
/// two restriction sets the hysteresis latch switches between.
#[derive(Clone, Debug)]
pub struct AdaptivePolicyConfig {
    /// 7-day incidence per 100k at or above which a lockdown starts.
    pub lockdown_trigger: f64,
    /// 7-day incidence per 100k at or below which (sustained for the whole
    /// trailing window) everything opens again.
    pub open_trigger: f64,
    /// Restrictions in force while locked down.
    pub lockdown_policy: RestrictionSchedule,
    /// Restrictions in force while open.
    pub open_policy: RestrictionSchedule,
}

/// Configuration of a [`FixedPolicy`]: a single schedule played back by
/// date, with no feedback.
#[derive(Clone, Debug, Default)]
pub struct FixedPolicyConfig {
    pub schedule: RestrictionSchedule,
}

/// The closed set of policy kinds a scenario can run.
#[derive(Clone, Debug)]
pub enum PolicyConfig {
    Fixed(FixedPolicyConfig),
    Adaptive(AdaptivePolicyConfig),
}

impl PolicyConfig {
    /// Construct the matching controller.
    pub fn into_controller(self) -> Box<dyn PolicyController> {
        match self {
            PolicyConfig::Fixed(config) => Box::new(FixedPolicy::new(config)),
            PolicyConfig::Adaptive(config) => Box::new(AdaptivePolicy::new(config)),
        }
    }
}
