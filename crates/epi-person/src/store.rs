//! Core person storage: `PersonStore` (SoA data) and `PersonRngs` (per-person
//! RNG).
//!
//! # Why two structs?
//!
//! The parallel decide phase needs `&mut PersonRngs` (exclusive mutable
//! access to each person's RNG) and `&PersonStore` (shared read access to
//! population state) simultaneously.  Rust's borrow checker forbids this if
//! both live inside a single struct.  Keeping RNGs in a separate
//! `PersonRngs` struct resolves the conflict cleanly:
//!
//! ```ignore
//! // epi-sim day loop (simplified):
//! let store: &PersonStore = &sim.store;
//! let decisions = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| model.decide_next_state(PersonId(i as u32), store, day, rng))
//!     .collect::<Vec<_>>();
//! ```

use epi_core::{Day, PersonId, PersonRng};

use crate::{DiseaseStatus, StatusHistory, VaccinationStatus, VirusStrain};

// ── PersonRngs ────────────────────────────────────────────────────────────────

/// Per-person deterministic RNG state, separated from [`PersonStore`] to
/// enable simultaneous `&mut PersonRngs` + `&PersonStore` borrows in the
/// parallel decide phase.
///
/// Per-person RNG state must never be shared between threads; the decide
/// phase hands each worker exclusive references to disjoint entries.
pub struct PersonRngs {
    pub inner: Vec<PersonRng>,
}

impl PersonRngs {
    /// Allocate and seed `count` per-person RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| PersonRng::new(global_seed, PersonId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one person's RNG.
    #[inline]
    pub fn get_mut(&mut self, person: PersonId) -> &mut PersonRng {
        &mut self.inner[person.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Return mutable references to the RNGs for a set of persons.
    ///
    /// Used by epi-sim's parallel decide phase: the due-person list is
    /// zipped with the returned refs and processed with Rayon.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `persons` must contain no duplicate `PersonId`s and all indices must
    /// be in-bounds.  Both invariants hold for the decide phase because the
    /// due list is built from a single ascending scan of the store.
    pub fn get_many_mut(&mut self, persons: &[PersonId]) -> Vec<&mut PersonRng> {
        let ptr = self.inner.as_mut_ptr();
        // SAFETY: Every `PersonId` in `persons` is unique (caller invariant)
        // and within bounds (population size is fixed for the run).  Each
        // pointer therefore aliases a distinct element of `self.inner`, so
        // no two references overlap.
        persons
            .iter()
            .map(|p| unsafe { &mut *ptr.add(p.index()) })
            .collect()
    }
}

// ── PersonStore ───────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all per-person health state.
///
/// Every `Vec` field has exactly `count` elements; the `PersonId` value is
/// the index into all of them.  The decide phase reads this store immutably;
/// writes go through the mutators below, which keep the episode history and
/// counters consistent:
///
/// - [`set_status`][Self::set_status] appends to the episode history and
///   wipes it on re-entry to `Susceptible`;
/// - [`infect`][Self::infect] / [`record_vaccination`][Self::record_vaccination]
///   are the entry points for the external infection and vaccination
///   engines.
pub struct PersonStore {
    /// Number of persons.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Health state ──────────────────────────────────────────────────────
    status: Vec<DiseaseStatus>,

    /// Strain of the current (or most recent) infection episode.
    /// `None` for never-infected persons.
    strain: Vec<Option<VirusStrain>>,

    /// Per-episode status history (bitmask + first-entry log).
    history: Vec<StatusHistory>,

    // ── Immunization counters (written by external engines) ──────────────
    vaccination_status: Vec<VaccinationStatus>,
    num_vaccinations: Vec<u32>,
    /// Total infections including the current episode.
    num_infections: Vec<u32>,
}

impl PersonStore {
    /// Create a store of `count` susceptible, unvaccinated persons.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            status: vec![DiseaseStatus::Susceptible; count],
            strain: vec![None; count],
            history: vec![StatusHistory::new(); count],
            vaccination_status: vec![VaccinationStatus::No; count],
            num_vaccinations: vec![0; count],
            num_infections: vec![0; count],
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self, person: PersonId) -> DiseaseStatus {
        self.status[person.index()]
    }

    /// Strain of the current episode.  `None` for never-infected persons.
    #[inline]
    pub fn strain(&self, person: PersonId) -> Option<VirusStrain> {
        self.strain[person.index()]
    }

    #[inline]
    pub fn vaccination_status(&self, person: PersonId) -> VaccinationStatus {
        self.vaccination_status[person.index()]
    }

    #[inline]
    pub fn num_vaccinations(&self, person: PersonId) -> u32 {
        self.num_vaccinations[person.index()]
    }

    /// Total infections including the current episode.
    #[inline]
    pub fn num_infections(&self, person: PersonId) -> u32 {
        self.num_infections[person.index()]
    }

    #[inline]
    pub fn history(&self, person: PersonId) -> &StatusHistory {
        &self.history[person.index()]
    }

    /// Iterate over all person IDs in ascending order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.count as u32).map(PersonId)
    }

    /// Count persons currently in `status`.
    pub fn count_status(&self, status: DiseaseStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Commit a status change decided for `day`.
    ///
    /// Appends the new status to the episode history; the
    /// `Recovered → Susceptible` edge instead wipes the episode history,
    /// so "has ever been in state X" queries never see a previous episode.
    pub fn set_status(&mut self, person: PersonId, status: DiseaseStatus, day: Day) {
        let i = person.index();
        if status == DiseaseStatus::Susceptible {
            self.history[i].clear();
        } else {
            self.history[i].record(status, day);
        }
        self.status[i] = status;
    }

    /// Begin a new infection episode.  Called by the external contact /
    /// infection engine when a susceptible person is exposed.
    ///
    /// # Panics
    /// Panics in debug mode if the person is not currently `Susceptible`.
    pub fn infect(&mut self, person: PersonId, strain: VirusStrain, day: Day) {
        let i = person.index();
        debug_assert_eq!(
            self.status[i],
            DiseaseStatus::Susceptible,
            "cannot infect {person}: not susceptible"
        );
        self.strain[i] = Some(strain);
        self.num_infections[i] += 1;
        self.set_status(person, DiseaseStatus::InfectedButNotContagious, day);
    }

    /// Register one (effective) vaccination.  Called by the external
    /// vaccination engine.
    pub fn record_vaccination(&mut self, person: PersonId) {
        let i = person.index();
        self.vaccination_status[i] = VaccinationStatus::Yes;
        self.num_vaccinations[i] += 1;
    }
}
