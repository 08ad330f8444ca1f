//! `epi-progression` — the per-person disease-status transition engine.
//!
//! Once per simulated day, for every person carrying an active infection
//! episode, the simulation asks a [`TransitionModel`] for the person's next
//! [`DiseaseStatus`][epi_person::DiseaseStatus].  The decision is a pure
//! function of the person's snapshot, the current day, and one uniform draw
//! from that person's own RNG stream — nothing else — which is what makes
//! the decide phase embarrassingly parallel.
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`model`]     | `TransitionModel` trait (decision + factor hooks)    |
//! | [`antibody`]  | `AntibodyTransitionModel` — immunity-modulated rules |
//! | [`immunity`]  | `ImmunityModel` trait, `UniformImmunity`             |
//! | [`config`]    | `StrainParams`, `StrainLookup`, `ProgressionConfig`  |

pub mod antibody;
pub mod config;
pub mod error;
pub mod immunity;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use antibody::AntibodyTransitionModel;
pub use config::{ProgressionConfig, StrainLookup, StrainParams, WaningConfig};
pub use error::{ProgressionError, ProgressionResult};
pub use immunity::{ImmunityModel, UniformImmunity};
pub use model::TransitionModel;
