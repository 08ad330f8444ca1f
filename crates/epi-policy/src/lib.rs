//! `epi-policy` — non-pharmaceutical interventions for the `rust_epi`
//! workspace.
//!
//! The policy side of the simulation is a closed feedback loop: once per
//! simulated day a population-level [`DailyReport`] is fed to a
//! [`PolicyController`], which may overlay dated [`Restriction`] values
//! onto the live [`RestrictionRegistry`].  The (external) contact model
//! reads the registry when scaling per-activity contact opportunities.
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`restriction`] | `Restriction`, `MaskType`                            |
//! | [`registry`]    | `RestrictionRegistry` (live per-activity values)     |
//! | [`schedule`]    | `RestrictionSchedule`, `PolicyConfig` variants       |
//! | [`report`]      | `DailyReport`                                        |
//! | [`controller`]  | `PolicyController` trait, `Regime`                   |
//! | [`adaptive`]    | `AdaptivePolicy` — incidence-triggered hysteresis    |
//! | [`fixed`]       | `FixedPolicy` — date-driven schedule playback        |
//! | [`loader`]      | CSV restriction-schedule loader                      |

pub mod adaptive;
pub mod controller;
pub mod error;
pub mod fixed;
pub mod loader;
pub mod registry;
pub mod report;
pub mod restriction;
pub mod schedule;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use adaptive::AdaptivePolicy;
pub use controller::{PolicyController, Regime};
pub use error::{PolicyError, PolicyResult};
pub use fixed::FixedPolicy;
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use registry::RestrictionRegistry;
pub use report::DailyReport;
pub use restriction::{MaskType, Restriction};
pub use schedule::{AdaptivePolicyConfig, FixedPolicyConfig, PolicyConfig, RestrictionSchedule};
