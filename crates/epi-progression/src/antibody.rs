//! Antibody-dependent disease-status transitions.
//!
//! # Decision rules
//!
//! One uniform draw per stochastic state, compared against a calibrated
//! base probability times the modulating factors:
//!
//! | From                        | Progression (else `Recovered`)   | Base    | Modulators                                            |
//! |-----------------------------|----------------------------------|---------|-------------------------------------------------------|
//! | `InfectedButNotContagious`  | `Contagious`                     | 1.0     | —                                                     |
//! | `Contagious`                | `ShowingSymptoms`                | 0.8     | symptom-factor hook                                   |
//! | `ShowingSymptoms`           | `SeriouslySick`                  | 0.05625 | strain factor (vaccinated split) × immunity factor    |
//! | `SeriouslySick`             | `Critical`                       | 0.25    | strain critical factor × critical hook; no draw after a prior `Critical` this episode |
//! | `Critical`                  | `Deceased` else `SeriouslySickAfterCritical` | per strain | always draws, even at probability 0     |
//! | `SeriouslySickAfterCritical`| `Recovered`                      | 1.0     | —                                                     |
//! | `Recovered`                 | `Susceptible`                    | 1.0     | —                                                     |
//!
//! Products of factors are clamped to `[0, 1]` before the comparison.
//!
//! # RNG-stream alignment
//!
//! The `Critical` rule consumes its draw even when the deceased probability
//! is exactly 0, so per-person streams stay draw-for-draw aligned between
//! scenarios that differ only in strain severity.  The one deliberate
//! exception is the post-`Critical` relapse guard: a person whose episode
//! already passed through `Critical` goes straight to `Recovered` without
//! a draw.

use epi_core::{Day, PersonId, PersonRng};
use epi_person::{DiseaseStatus, PersonStore, VaccinationStatus, VirusStrain};

use crate::config::{ProgressionConfig, StrainLookup};
use crate::immunity::ImmunityModel;
use crate::model::TransitionModel;

// ── Calibrated base probabilities ─────────────────────────────────────────────

/// `Contagious → ShowingSymptoms`.
const PROBA_SHOWING_SYMPTOMS: f64 = 0.8;
/// `ShowingSymptoms → SeriouslySick`.
const PROBA_SERIOUSLY_SICK: f64 = 0.05625;
/// `SeriouslySick → Critical`.
const PROBA_CRITICAL: f64 = 0.25;

// ── Vaccine effectiveness against severe progression ──────────────────────────
//
// Three tiers of immunization history, each split by Omicron-family vs.
// other variants.

/// Boosted: more than one vaccination, or vaccinated plus repeat infection.
const VE_BOOSTED_OMICRON: f64 = 0.90;
const VE_BOOSTED_OTHER: f64 = 0.95;
/// Exactly one vaccination, or a severe course earlier this episode.
const VE_SINGLE_OMICRON: f64 = 0.55;
const VE_SINGLE_OTHER: f64 = 0.90;
/// Unvaccinated but previously exposed.
const VE_EXPOSED_OMICRON: f64 = 0.55;
const VE_EXPOSED_OTHER: f64 = 0.60;

// ── AntibodyTransitionModel ───────────────────────────────────────────────────

/// The [`TransitionModel`] whose severe-progression risk is modulated by
/// each person's accumulated immunity and the episode's virus variant.
///
/// The immunity model is injected: the engine never looks inside the
/// antibody kinetics, it only divides residual risk by the supplied factor.
pub struct AntibodyTransitionModel<I: ImmunityModel> {
    strains:  StrainLookup,
    config:   ProgressionConfig,
    immunity: I,
}

impl<I: ImmunityModel> AntibodyTransitionModel<I> {
    pub fn new(strains: StrainLookup, config: ProgressionConfig, immunity: I) -> Self {
        Self { strains, config, immunity }
    }

    /// Strain of the person's current episode.
    ///
    /// # Panics
    /// Panics if the person has no episode strain — an infected person
    /// without a strain is a wiring bug in the infection engine.
    fn episode_strain(&self, person: PersonId, store: &PersonStore) -> VirusStrain {
        match store.strain(person) {
            Some(strain) => strain,
            None => panic!("{person} is in an infection episode but has no virus strain"),
        }
    }

    /// Probability multiplier from optional post-recovery waning; `1.0`
    /// unless the option is enabled and the person is on a repeat
    /// infection.
    fn waning_factor(&self, person: PersonId, store: &PersonStore, day: Day) -> f64 {
        match &self.config.waning_after_recovery {
            Some(waning) if store.num_infections(person) > 1 => {
                waning.factor(store.history(person), day)
            }
            _ => 1.0,
        }
    }
}

impl<I: ImmunityModel> TransitionModel for AntibodyTransitionModel<I> {
    fn decide_next_state(
        &self,
        person: PersonId,
        store:  &PersonStore,
        day:    Day,
        rng:    &mut PersonRng,
    ) -> DiseaseStatus {
        let status = store.status(person);
        match status {
            DiseaseStatus::InfectedButNotContagious => DiseaseStatus::Contagious,

            DiseaseStatus::Contagious => {
                let p = (PROBA_SHOWING_SYMPTOMS
                    * self.showing_symptoms_factor(person, store, day))
                .clamp(0.0, 1.0);
                if rng.draw() < p {
                    DiseaseStatus::ShowingSymptoms
                } else {
                    DiseaseStatus::Recovered
                }
            }

            DiseaseStatus::ShowingSymptoms => {
                let params = self.strains.params(self.episode_strain(person, store));
                let strain_factor = match store.vaccination_status(person) {
                    VaccinationStatus::Yes => params.factor_seriously_sick_vaccinated,
                    VaccinationStatus::No => params.factor_seriously_sick,
                };
                let p = (PROBA_SERIOUSLY_SICK
                    * strain_factor
                    * self.seriously_sick_factor(person, store, day)
                    * self.waning_factor(person, store, day))
                .clamp(0.0, 1.0);
                if rng.draw() < p {
                    DiseaseStatus::SeriouslySick
                } else {
                    DiseaseStatus::Recovered
                }
            }

            DiseaseStatus::SeriouslySick => {
                // A second trip through intensive care is not modelled:
                // once an episode has seen `Critical`, the only way out of
                // `SeriouslySick` is recovery.
                if store.history(person).had_status(DiseaseStatus::Critical) {
                    return DiseaseStatus::Recovered;
                }
                let params = self.strains.params(self.episode_strain(person, store));
                let p = (PROBA_CRITICAL
                    * params.factor_critical
                    * self.critical_factor(person, store, day))
                .clamp(0.0, 1.0);
                if rng.draw() < p {
                    DiseaseStatus::Critical
                } else {
                    DiseaseStatus::Recovered
                }
            }

            DiseaseStatus::Critical => {
                let params = self.strains.params(self.episode_strain(person, store));
                // The draw happens unconditionally: a zero probability is a
                // guaranteed-false comparison, not a skipped draw.
                if rng.draw() < params.proba_deceased {
                    DiseaseStatus::Deceased
                } else {
                    DiseaseStatus::SeriouslySickAfterCritical
                }
            }

            DiseaseStatus::SeriouslySickAfterCritical => DiseaseStatus::Recovered,

            DiseaseStatus::Recovered => DiseaseStatus::Susceptible,

            DiseaseStatus::Susceptible | DiseaseStatus::Deceased => {
                panic!("no state transition defined for {status}")
            }
        }
    }

    /// Immunity-derived multiplier on the severe-progression probability.
    ///
    /// Unvaccinated first-time cases get exactly `1.0`.  Everyone else gets
    /// residual risk `1 − ve` from a three-tier vaccine-effectiveness
    /// lookup, divided by the injected immunity factor and clamped to
    /// `[0, 1]`.
    fn seriously_sick_factor(&self, person: PersonId, store: &PersonStore, _day: Day) -> f64 {
        let num_vaccinations = store.num_vaccinations(person);
        // Infections before the current episode.
        let prior_infections = store.num_infections(person).saturating_sub(1);

        if num_vaccinations == 0 && prior_infections == 0 {
            return 1.0;
        }

        let strain = self.episode_strain(person, store);
        let omicron = strain.is_omicron();

        // Boosted by a repeat shot, or by vaccination plus repeat infection.
        let ve_seriously_sick = if num_vaccinations > 1
            || (num_vaccinations > 0 && prior_infections > 1)
        {
            if omicron { VE_BOOSTED_OMICRON } else { VE_BOOSTED_OTHER }
        }
        // One shot, or a severe course earlier this episode.
        else if num_vaccinations == 1
            || store.history(person).had_status(DiseaseStatus::SeriouslySick)
        {
            if omicron { VE_SINGLE_OMICRON } else { VE_SINGLE_OTHER }
        } else {
            if omicron { VE_EXPOSED_OMICRON } else { VE_EXPOSED_OTHER }
        };

        let immunity = self
            .immunity
            .immunity_factor(person, store, strain, self.config.beta);
        debug_assert!(
            immunity > 0.0 && immunity.is_finite(),
            "immunity factor must be positive and finite, got {immunity}"
        );

        ((1.0 - ve_seriously_sick) / immunity).clamp(0.0, 1.0)
    }
}
