//! `epi-sim` — the daily tick loop tying the progression and policy
//! engines together.
//!
//! One simulated day is processed in four phases, strictly sequential
//! across days (day N is fully committed before day N+1 starts):
//!
//! 1. **Decide** (optionally parallel): for every person in an active
//!    episode, ask the [`TransitionModel`][epi_progression::TransitionModel]
//!    for tomorrow's status.  Each person only reads their own snapshot and
//!    their own RNG stream, so this phase is embarrassingly parallel.
//! 2. **Apply** (sequential, ascending `PersonId` for determinism): commit
//!    the decided statuses and update the cumulative symptomatic counter.
//! 3. **Report**: aggregate the day's [`DailyReport`][epi_policy::DailyReport].
//! 4. **Policy** (sequential, single writer): feed the report to the
//!    [`PolicyController`][epi_policy::PolicyController], which may overlay
//!    restrictions onto the registry the (external) contact model reads.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`sim`]      | `Sim` — state + the four-phase day loop               |
//! | [`builder`]  | `SimBuilder`                                          |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                   |
//! | [`error`]    | `SimError`, `SimResult`                               |

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
