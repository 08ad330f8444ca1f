//! The per-day policy decision seam.

use epi_core::SimDate;

use crate::registry::RestrictionRegistry;
use crate::report::DailyReport;

// ── Regime ────────────────────────────────────────────────────────────────────

/// The two-valued latch an adaptive controller switches between.
/// Non-adaptive controllers report `Open` throughout.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Regime {
    #[default]
    Open,
    Lockdown,
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Regime::Open => "open",
            Regime::Lockdown => "lockdown",
        })
    }
}

// ── PolicyController ──────────────────────────────────────────────────────────

/// A policy evaluated once per simulated day, after the day's report is
/// aggregated and before the next day's contact computation.
///
/// # Contract
///
/// - `update` is called exactly once per day with strictly increasing
///   report dates; the controller owns whatever history it needs across
///   calls (incidence series, latches).
/// - The registry reference is exclusive for the duration of the call —
///   the controller is the day's single writer.
/// - Insufficient history (warm-up) is not an error: the controller simply
///   makes no change.
pub trait PolicyController: Send {
    /// Called once before day 0 with the scenario start date.  Default:
    /// nothing to initialize.
    fn init(&mut self, _start: SimDate, _registry: &mut RestrictionRegistry) {}

    /// Ingest one day's report and possibly overlay restrictions.
    fn update(&mut self, report: &DailyReport, registry: &mut RestrictionRegistry);

    /// The regime after the most recent `update`.
    fn regime(&self) -> Regime {
        Regime::Open
    }
}
