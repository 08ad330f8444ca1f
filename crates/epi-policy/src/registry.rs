//! The live activity → restriction store.

use std::collections::BTreeMap;

use epi_core::SimDate;

use crate::restriction::Restriction;
use crate::schedule::RestrictionSchedule;

/// The shared, named-activity → restriction store.
///
/// Created once at wiring time from the scenario's activity list, with
/// every activity unrestricted.  Restrictions are mutated in place by the
/// policy controller and read by the (external) contact model; entries are
/// never added or removed during a run.
///
/// # Writer discipline
///
/// The registry has a single writer: the policy phase of the day loop.
/// Nothing else may hold a reference while that phase runs; `epi-sim`
/// enforces this by owning the registry and lending `&mut` only to the
/// controller.
#[derive(Clone, Debug, Default)]
pub struct RestrictionRegistry {
    inner: BTreeMap<String, Restriction>,
}

impl RestrictionRegistry {
    /// Build a registry with one unrestricted entry per activity.
    pub fn from_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inner = activities
            .into_iter()
            .map(|a| (a.into(), Restriction::none()))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, activity: &str) -> bool {
        self.inner.contains_key(activity)
    }

    /// The live restriction for one activity.
    pub fn get(&self, activity: &str) -> Option<&Restriction> {
        self.inner.get(activity)
    }

    /// Iterate `(activity, restriction)` in activity order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Restriction)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ── Overlay application ───────────────────────────────────────────────

    /// Apply a policy's historical schedule up to (but excluding) `today`.
    ///
    /// For every activity present in **both** the registry and the
    /// schedule, every dated entry strictly before `today` is merged onto
    /// the live restriction in ascending date order, so the latest-dated
    /// overlay wins per field.  Activities the schedule doesn't mention are
    /// left untouched — that is how partial policies are expressed.
    pub fn apply_before(&mut self, today: SimDate, schedule: &RestrictionSchedule) {
        for (activity, live) in &mut self.inner {
            let Some(dated) = schedule.get(activity) else { continue };
            let mut applied = 0usize;
            for (_, overlay) in dated.range(..today) {
                live.merge(overlay);
                applied += 1;
            }
            if applied > 0 {
                log::debug!("{activity}: applied {applied} overlay(s) dated before {today}, now {live}");
            }
        }
    }

    /// Apply exactly the entries dated `date` (used by date-driven
    /// schedule playback).
    pub fn apply_on(&mut self, date: SimDate, schedule: &RestrictionSchedule) {
        for (activity, live) in &mut self.inner {
            let Some(dated) = schedule.get(activity) else { continue };
            if let Some(overlay) = dated.get(&date) {
                live.merge(overlay);
                log::debug!("{activity}: applied overlay dated {date}, now {live}");
            }
        }
    }
}
