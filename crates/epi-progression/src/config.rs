//! Strain severity parameters and progression configuration.

use rustc_hash::FxHashMap;

use epi_core::Day;
use epi_person::{DiseaseStatus, StatusHistory, VirusStrain};

use crate::error::{ProgressionError, ProgressionResult};

// ── StrainParams ──────────────────────────────────────────────────────────────

/// Severity multipliers for one virus variant.
///
/// All factors multiply the calibrated base probabilities in the transition
/// rules; `1.0` means "same severity as the ancestral calibration".
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrainParams {
    /// Multiplier on `ShowingSymptoms → SeriouslySick` for unvaccinated
    /// persons.
    pub factor_seriously_sick: f64,

    /// Multiplier on `ShowingSymptoms → SeriouslySick` for vaccinated
    /// persons.
    pub factor_seriously_sick_vaccinated: f64,

    /// Multiplier on `SeriouslySick → Critical`.
    pub factor_critical: f64,

    /// Probability of `Critical → Deceased`.  May be exactly 0; the
    /// transition rule still consumes its RNG draw in that case.
    pub proba_deceased: f64,
}

impl Default for StrainParams {
    fn default() -> Self {
        Self {
            factor_seriously_sick: 1.0,
            factor_seriously_sick_vaccinated: 1.0,
            factor_critical: 1.0,
            proba_deceased: 0.0,
        }
    }
}

impl StrainParams {
    /// Reject NaN or negative multipliers and out-of-range probabilities.
    pub fn validate(&self) -> ProgressionResult<()> {
        let factors = [
            ("factor_seriously_sick", self.factor_seriously_sick),
            ("factor_seriously_sick_vaccinated", self.factor_seriously_sick_vaccinated),
            ("factor_critical", self.factor_critical),
        ];
        for (name, v) in factors {
            if !v.is_finite() || v < 0.0 {
                return Err(ProgressionError::Config(format!("{name} must be finite and >= 0, got {v}")));
            }
        }
        if !(0.0..=1.0).contains(&self.proba_deceased) {
            return Err(ProgressionError::Config(format!(
                "proba_deceased must be in [0, 1], got {}",
                self.proba_deceased
            )));
        }
        Ok(())
    }
}

// ── StrainLookup ──────────────────────────────────────────────────────────────

/// Per-variant severity parameters with an unrestricted default.
///
/// Variants never inserted fall back to [`StrainParams::default`], so a
/// scenario only configures the strains it actually distinguishes.
#[derive(Clone, Debug, Default)]
pub struct StrainLookup {
    params: FxHashMap<VirusStrain, StrainParams>,
    fallback: StrainParams,
}

impl StrainLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the parameters for one strain.
    pub fn insert(&mut self, strain: VirusStrain, params: StrainParams) -> ProgressionResult<()> {
        params.validate()?;
        self.params.insert(strain, params);
        Ok(())
    }

    /// Builder-style [`insert`][Self::insert] that panics on invalid params.
    /// Intended for literal scenario setup code.
    #[must_use]
    pub fn with(mut self, strain: VirusStrain, params: StrainParams) -> Self {
        self.insert(strain, params)
            .unwrap_or_else(|e| panic!("invalid params for {strain}: {e}"));
        self
    }

    /// Parameters for `strain`, falling back to the default set.
    #[inline]
    pub fn params(&self, strain: VirusStrain) -> &StrainParams {
        self.params.get(&strain).unwrap_or(&self.fallback)
    }
}

// ── WaningConfig ──────────────────────────────────────────────────────────────

/// Optional waning of protection against severe progression after recovery.
///
/// The source model carries this adjustment disabled; it stays off unless a
/// scenario sets [`ProgressionConfig::waning_after_recovery`].  When
/// enabled, the `ShowingSymptoms → SeriouslySick` probability of a
/// reinfected person is additionally multiplied by the loss fraction
///
/// ```text
/// min(loss_per_year * completed_years_since_recovery, 1.0)
/// ```
///
/// Completed years use integer division (no protection loss within the
/// first year, then stepwise).  A person whose current episode history has
/// no `Recovered` entry gets a neutral `1.0` — episode histories are wiped
/// on reinfection, so in practice this hook only bites when recovery and
/// reinfection bookkeeping are extended to span episodes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaningConfig {
    /// Fraction of protection lost per completed year since recovery.
    pub loss_per_year: f64,
}

impl Default for WaningConfig {
    fn default() -> Self {
        Self { loss_per_year: 0.2 }
    }
}

impl WaningConfig {
    /// The multiplier applied to the severe-progression probability.
    pub fn factor(&self, history: &StatusHistory, day: Day) -> f64 {
        match history.days_since(DiseaseStatus::Recovered, day) {
            Some(days) => (self.loss_per_year * (days / 365) as f64).min(1.0),
            None => 1.0,
        }
    }
}

// ── ProgressionConfig ─────────────────────────────────────────────────────────

/// Tunables of the antibody-dependent transition model that are not
/// per-strain.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionConfig {
    /// Steepness constant handed to the immunity model's
    /// antibody-titer-to-protection mapping.
    pub beta: f64,

    /// Off-by-default waning of post-recovery protection; see
    /// [`WaningConfig`].
    pub waning_after_recovery: Option<WaningConfig>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self { beta: 1.0, waning_after_recovery: None }
    }
}
