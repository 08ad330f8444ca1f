//! Unit tests for epi-person.

#[cfg(test)]
mod status {
    use crate::DiseaseStatus;

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u16;
        for s in DiseaseStatus::ALL {
            assert_eq!(seen & s.bit(), 0, "duplicate bit for {s}");
            seen |= s.bit();
        }
    }

    #[test]
    fn transition_eligibility() {
        assert!(!DiseaseStatus::Susceptible.needs_transition());
        assert!(!DiseaseStatus::Deceased.needs_transition());
        assert!(DiseaseStatus::InfectedButNotContagious.needs_transition());
        assert!(DiseaseStatus::Recovered.needs_transition());
    }

    #[test]
    fn contagious_states() {
        assert!(!DiseaseStatus::Susceptible.is_contagious());
        assert!(!DiseaseStatus::InfectedButNotContagious.is_contagious());
        assert!(DiseaseStatus::Contagious.is_contagious());
        assert!(DiseaseStatus::Critical.is_contagious());
        assert!(!DiseaseStatus::Recovered.is_contagious());
    }
}

#[cfg(test)]
mod strain {
    use crate::VirusStrain;

    #[test]
    fn omicron_family() {
        assert!(VirusStrain::OmicronBa1.is_omicron());
        assert!(VirusStrain::OmicronBa2.is_omicron());
        assert!(!VirusStrain::SarsCov2.is_omicron());
        assert!(!VirusStrain::Delta.is_omicron());
    }
}

#[cfg(test)]
mod history {
    use epi_core::Day;

    use crate::{DiseaseStatus, StatusHistory};

    #[test]
    fn record_and_query() {
        let mut h = StatusHistory::new();
        h.record(DiseaseStatus::Contagious, Day(3));
        h.record(DiseaseStatus::ShowingSymptoms, Day(5));

        assert!(h.had_status(DiseaseStatus::Contagious));
        assert!(h.had_status(DiseaseStatus::ShowingSymptoms));
        assert!(!h.had_status(DiseaseStatus::Critical));
        assert_eq!(h.day_entered(DiseaseStatus::ShowingSymptoms), Some(Day(5)));
        assert_eq!(h.days_since(DiseaseStatus::Contagious, Day(10)), Some(7));
    }

    #[test]
    fn first_entry_wins() {
        let mut h = StatusHistory::new();
        h.record(DiseaseStatus::Recovered, Day(10));
        h.record(DiseaseStatus::Recovered, Day(20));
        assert_eq!(h.day_entered(DiseaseStatus::Recovered), Some(Day(10)));
        assert_eq!(h.entries().len(), 1);
    }

    #[test]
    fn days_since_unknown_status_is_none() {
        let h = StatusHistory::new();
        assert_eq!(h.days_since(DiseaseStatus::Critical, Day(100)), None);
    }

    #[test]
    fn clear_wipes_everything() {
        let mut h = StatusHistory::new();
        h.record(DiseaseStatus::Critical, Day(8));
        h.clear();
        assert!(!h.had_status(DiseaseStatus::Critical));
        assert!(h.is_empty());
    }
}

#[cfg(test)]
mod store {
    use epi_core::{Day, PersonId};

    use crate::{DiseaseStatus, PersonRngs, PersonStore, VaccinationStatus, VirusStrain};

    #[test]
    fn new_store_is_susceptible() {
        let store = PersonStore::new(3);
        for p in store.person_ids() {
            assert_eq!(store.status(p), DiseaseStatus::Susceptible);
            assert_eq!(store.strain(p), None);
            assert_eq!(store.num_infections(p), 0);
        }
        assert_eq!(store.count_status(DiseaseStatus::Susceptible), 3);
    }

    #[test]
    fn infect_sets_strain_and_counters() {
        let mut store = PersonStore::new(2);
        let p = PersonId(1);
        store.infect(p, VirusStrain::Delta, Day(4));

        assert_eq!(store.status(p), DiseaseStatus::InfectedButNotContagious);
        assert_eq!(store.strain(p), Some(VirusStrain::Delta));
        assert_eq!(store.num_infections(p), 1);
        assert!(store.history(p).had_status(DiseaseStatus::InfectedButNotContagious));
        // The other person is untouched.
        assert_eq!(store.status(PersonId(0)), DiseaseStatus::Susceptible);
    }

    #[test]
    fn vaccination_updates_status_and_count() {
        let mut store = PersonStore::new(1);
        let p = PersonId(0);
        assert_eq!(store.vaccination_status(p), VaccinationStatus::No);
        store.record_vaccination(p);
        store.record_vaccination(p);
        assert_eq!(store.vaccination_status(p), VaccinationStatus::Yes);
        assert_eq!(store.num_vaccinations(p), 2);
    }

    #[test]
    fn susceptible_reentry_clears_episode_history() {
        let mut store = PersonStore::new(1);
        let p = PersonId(0);
        store.infect(p, VirusStrain::Alpha, Day(0));
        store.set_status(p, DiseaseStatus::Contagious, Day(2));
        store.set_status(p, DiseaseStatus::Recovered, Day(8));
        assert!(store.history(p).had_status(DiseaseStatus::Contagious));

        store.set_status(p, DiseaseStatus::Susceptible, Day(9));
        assert!(store.history(p).is_empty());
        // Cross-episode memory survives in the counters.
        assert_eq!(store.num_infections(p), 1);
        // Strain of the last episode is still queryable.
        assert_eq!(store.strain(p), Some(VirusStrain::Alpha));
    }

    #[test]
    fn rngs_split_borrow() {
        let store = PersonStore::new(4);
        let mut rngs = PersonRngs::new(4, 7);
        let ids: Vec<PersonId> = store.person_ids().collect();
        let refs = rngs.get_many_mut(&ids);
        assert_eq!(refs.len(), 4);
        for rng in refs {
            let x = rng.draw();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
