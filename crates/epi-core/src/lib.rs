//! `epi-core` — foundational types for the `rust_epi` epidemic simulation
//! workspace.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `PersonId`                                            |
//! | [`date`]    | `SimDate` civil calendar date                         |
//! | [`time`]    | `Day`, `SimClock`, `SimConfig`                        |
//! | [`rng`]     | `PersonRng` (per-person), `SimRng` (global)           |
//! | [`error`]   | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod date;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use date::SimDate;
pub use error::{EpiError, EpiResult};
pub use ids::PersonId;
pub use rng::{PersonRng, SimRng};
pub use time::{Day, SimClock, SimConfig};
