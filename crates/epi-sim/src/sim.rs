//! The `Sim` struct and its day loop.

use epi_core::{Day, PersonId, SimClock, SimConfig, SimRng};
use epi_person::{DiseaseStatus, PersonRngs, PersonStore, VirusStrain};
use epi_policy::{DailyReport, PolicyController, RestrictionRegistry};
use epi_progression::TransitionModel;

use crate::{SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` holds all simulation state and drives the four-phase day loop
/// described at the [crate root][crate].  Create via
/// [`SimBuilder`][crate::SimBuilder].
///
/// The contact/transmission model is an external collaborator: new episodes
/// enter through [`seed_infection`][Self::seed_infection] /
/// [`seed_outbreak`][Self::seed_outbreak], and the collaborator reads
/// [`restrictions`][Self::restrictions] to scale contact opportunities.
pub struct Sim<P: TransitionModel> {
    /// Global configuration (total days, seed, start date).
    pub config: SimConfig,

    /// Simulation clock — tracks the current day and maps to calendar dates.
    pub clock: SimClock,

    /// Per-person health state (SoA arrays).  Read-only during the decide
    /// phase.
    pub store: PersonStore,

    /// Per-person deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: PersonRngs,

    /// The disease-status transition model.  Called once per active person
    /// per day.
    pub progression: P,

    /// The policy controller.  Called once per day with the aggregated
    /// report; sole writer of the restriction registry.
    pub policy: Box<dyn PolicyController>,

    /// Live per-activity restrictions, read by the external contact model.
    restrictions: RestrictionRegistry,

    /// RNG for global operations (outbreak seeding).
    pub sim_rng: SimRng,

    /// Persons that have ever entered `ShowingSymptoms`, cumulatively.
    cumulative_showing_symptoms: u64,
}

impl<P: TransitionModel> Sim<P> {
    /// Assembled by [`SimBuilder`][crate::SimBuilder]; not public API.
    pub(crate) fn assemble(
        config: SimConfig,
        store: PersonStore,
        rngs: PersonRngs,
        progression: P,
        policy: Box<dyn PolicyController>,
        restrictions: RestrictionRegistry,
        sim_rng: SimRng,
    ) -> Self {
        let clock = config.make_clock();
        Self {
            config,
            clock,
            store,
            rngs,
            progression,
            policy,
            restrictions,
            sim_rng,
            cumulative_showing_symptoms: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Read-only view of the live restriction registry.
    pub fn restrictions(&self) -> &RestrictionRegistry {
        &self.restrictions
    }

    /// Persons that have ever shown symptoms, cumulatively.
    pub fn cumulative_showing_symptoms(&self) -> u64 {
        self.cumulative_showing_symptoms
    }

    /// Start one infection episode for a specific susceptible person.
    pub fn seed_infection(&mut self, person: PersonId, strain: VirusStrain) -> SimResult<()> {
        if person.index() >= self.store.len() {
            return Err(SimError::Config(format!("{person} out of range")));
        }
        if self.store.status(person) != DiseaseStatus::Susceptible {
            return Err(SimError::Config(format!("{person} is not susceptible")));
        }
        self.store.infect(person, strain, self.clock.current_day);
        Ok(())
    }

    /// Infect `count` randomly chosen susceptible persons with `strain`.
    ///
    /// Returns the number actually infected, which is smaller than `count`
    /// when fewer susceptible persons remain.
    pub fn seed_outbreak(&mut self, strain: VirusStrain, count: usize) -> usize {
        let day = self.clock.current_day;
        let mut susceptible: Vec<PersonId> = self
            .store
            .person_ids()
            .filter(|&p| self.store.status(p) == DiseaseStatus::Susceptible)
            .collect();

        let n = count.min(susceptible.len());
        // Partial Fisher-Yates: pick n distinct persons deterministically.
        for i in 0..n {
            let j = self.sim_rng.gen_range(i..susceptible.len());
            susceptible.swap(i, j);
            self.store.infect(susceptible[i], strain, day);
        }
        n
    }

    /// Run the simulation from the current day to `config.end_day()`.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let today = self.clock.current_day;
            if today >= self.config.end_day() {
                break;
            }
            self.process_day(today, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_day);
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    ///
    /// Useful for tests, and for applications that interleave external
    /// steps (infection seeding, vaccination campaigns) between days.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let today = self.clock.current_day;
            self.process_day(today, observer);
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn process_day<O: SimObserver>(&mut self, today: Day, observer: &mut O) {
        observer.on_day_start(today, self.clock.date_of(today));

        // ── Phase 1: decide (read-only, optionally parallel) ──────────────
        let due: Vec<PersonId> = self
            .store
            .person_ids()
            .filter(|&p| self.store.status(p).needs_transition())
            .collect();

        let decisions = self.decide(today, &due);

        // ── Phase 2: apply (sequential, ascending PersonId) ───────────────
        //
        // Decisions arrive in ascending PersonId order (the due list is an
        // ascending scan).  Sequential application in this order makes
        // results deterministic even when the decide phase ran in parallel.
        for (person, next) in decisions {
            if next == DiseaseStatus::ShowingSymptoms {
                self.cumulative_showing_symptoms += 1;
            }
            self.store.set_status(person, next, today);
        }

        // ── Phase 3: aggregate the day's report ───────────────────────────
        let report = DailyReport {
            date: self.clock.date_of(today),
            n_showing_symptoms_cumulative: self.cumulative_showing_symptoms,
            n_total: self.store.len() as u64,
        };

        // ── Phase 4: policy (sequential, single registry writer) ──────────
        let regime_before = self.policy.regime();
        self.policy.update(&report, &mut self.restrictions);
        let regime_after = self.policy.regime();
        if regime_before != regime_after {
            log::info!("{today}: regime changed to {regime_after}");
            observer.on_regime_change(today, regime_after);
        }

        observer.on_day_end(today, &report, &self.store, &self.restrictions);
    }

    /// Evaluate the transition model for all due persons.
    ///
    /// With the `parallel` Cargo feature the evaluations run on Rayon's
    /// thread pool; each worker holds an exclusive slice of RNG state.
    fn decide(&mut self, today: Day, due: &[PersonId]) -> Vec<(PersonId, DiseaseStatus)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let store = &self.store;
        let progression = &self.progression;
        let rngs = &mut self.rngs;

        #[cfg(not(feature = "parallel"))]
        {
            due.iter()
                .map(|&person| {
                    let rng = rngs.get_mut(person);
                    (person, progression.decide_next_state(person, store, today, rng))
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // `get_many_mut` returns disjoint &mut refs indexed by unique
            // PersonIds.  SAFETY precondition: the due list has unique IDs
            // (single ascending scan).
            let rng_refs = rngs.get_many_mut(due);

            due.par_iter()
                .zip(rng_refs.into_par_iter())
                .map(|(&person, rng)| {
                    (person, progression.decide_next_state(person, store, today, rng))
                })
                .collect()
        }
    }
}
