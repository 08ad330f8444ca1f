//! Simulation observer trait for progress reporting and data collection.

use epi_core::{Day, SimDate};
use epi_person::PersonStore;
use epi_policy::{DailyReport, Regime, RestrictionRegistry};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Result persistence lives entirely
/// behind this seam — the simulation itself never writes files.
///
/// # Example — daily incidence printer
///
/// ```rust,ignore
/// struct IncidencePrinter;
///
/// impl SimObserver for IncidencePrinter {
///     fn on_day_end(
///         &mut self,
///         day: Day,
///         report: &DailyReport,
///         _store: &PersonStore,
///         _restrictions: &RestrictionRegistry,
///     ) {
///         println!("{day}: cumulative rate {:.1}/100k", report.incidence_per_100k());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each day, before any processing.
    fn on_day_start(&mut self, _day: Day, _date: SimDate) {}

    /// Called at the end of each day with the day's report and read-only
    /// access to the full population and restriction state.
    fn on_day_end(
        &mut self,
        _day: Day,
        _report: &DailyReport,
        _store: &PersonStore,
        _restrictions: &RestrictionRegistry,
    ) {
    }

    /// Called whenever the policy controller switches regime.
    fn on_regime_change(&mut self, _day: Day, _regime: Regime) {}

    /// Called once after the final day completes.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
