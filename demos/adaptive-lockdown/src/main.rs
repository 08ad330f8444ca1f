//! adaptive-lockdown — end-to-end demo for the rust_epi workspace.
//!
//! Simulates 100,000 persons through a seeded outbreak.  A toy exponential
//! importer stands in for the out-of-scope contact model: each day it seeds
//! new infections, with a growth rate scaled by how "open" the restriction
//! registry currently is.  That closes the feedback loop end to end:
//! rising incidence → adaptive lockdown → fewer seeded cases → incidence
//! decays → sustained-quiet window → reopening.

use anyhow::Result;

use epi_core::{Day, SimConfig, SimDate};
use epi_person::{DiseaseStatus, PersonStore, VirusStrain};
use epi_policy::{
    AdaptivePolicyConfig, DailyReport, PolicyConfig, Regime, Restriction,
    RestrictionRegistry, RestrictionSchedule,
};
use epi_progression::{
    AntibodyTransitionModel, ProgressionConfig, StrainLookup, StrainParams, UniformImmunity,
};
use epi_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:       usize = 100_000;
const SEED:             u64   = 42;
const SIM_DAYS:         u32   = 150;
const LOCKDOWN_TRIGGER: f64   = 50.0; // 7-day incidence per 100k
const OPEN_TRIGGER:     f64   = 10.0;

/// Imported cases on day 0.
const INITIAL_CASES: f64 = 2.0;
/// Daily growth of imports at full openness.
const GROWTH_RATE: f64 = 0.2;
/// Extra daily damping of imports while locked down.
const LOCKDOWN_DAMPING: f64 = 0.7;

// ── Observer ──────────────────────────────────────────────────────────────────

struct DailyPrinter {
    regime: Regime,
}

impl SimObserver for DailyPrinter {
    fn on_day_end(
        &mut self,
        day: Day,
        report: &DailyReport,
        store: &PersonStore,
        _restrictions: &RestrictionRegistry,
    ) {
        if day.0 % 7 == 0 {
            println!(
                "{} ({}) [{}]  contagious {:5}  symptomatic {:5}  critical {:3}  cum-rate {:7.1}/100k",
                day,
                report.date,
                self.regime,
                store.count_status(DiseaseStatus::Contagious),
                store.count_status(DiseaseStatus::ShowingSymptoms),
                store.count_status(DiseaseStatus::Critical),
                report.incidence_per_100k(),
            );
        }
    }

    fn on_regime_change(&mut self, day: Day, regime: Regime) {
        self.regime = regime;
        println!(">>> {day}: regime is now {regime}");
    }

    fn on_sim_end(&mut self, final_day: Day) {
        println!("simulation finished after {final_day}");
    }
}

// ── Scenario wiring ───────────────────────────────────────────────────────────

fn build_policy() -> PolicyConfig {
    // Schedules anchored before the run so the whole history applies on a
    // regime switch.
    let epoch = SimDate::from_ymd(2020, 1, 1);

    let lockdown = RestrictionSchedule::new()
        .restrict(epoch, Restriction::of(0.45), ["work"])
        .restrict(epoch, Restriction::of(0.3), ["leisure"])
        .restrict(epoch, Restriction::of(0.0), ["educ_primary"]);

    let open = RestrictionSchedule::new()
        .restrict(epoch, Restriction::of(1.0), ["work", "leisure", "educ_primary"]);

    PolicyConfig::Adaptive(AdaptivePolicyConfig {
        lockdown_trigger: LOCKDOWN_TRIGGER,
        open_trigger: OPEN_TRIGGER,
        lockdown_policy: lockdown,
        open_policy: open,
    })
}

fn build_strains() -> StrainLookup {
    StrainLookup::new()
        .with(VirusStrain::Delta, StrainParams {
            factor_seriously_sick: 1.3,
            factor_seriously_sick_vaccinated: 0.8,
            factor_critical: 1.2,
            proba_deceased: 0.2,
        })
        .with(VirusStrain::OmicronBa1, StrainParams {
            factor_seriously_sick: 0.6,
            factor_seriously_sick_vaccinated: 0.4,
            factor_critical: 0.8,
            proba_deceased: 0.1,
        })
}

/// Mean participation fraction across the restricted activities — the
/// stand-in contact model's view of "how open is society".
fn openness(restrictions: &RestrictionRegistry) -> f64 {
    let (sum, n) = restrictions
        .iter()
        .filter_map(|(_, r)| r.remaining_fraction)
        .fold((0.0, 0usize), |(s, n), f| (s + f, n + 1));
    if n == 0 { 1.0 } else { sum / n as f64 }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig {
        start_date: SimDate::from_ymd(2021, 1, 1),
        total_days: SIM_DAYS,
        seed: SEED,
        num_threads: None,
    };

    let model = AntibodyTransitionModel::new(
        build_strains(),
        ProgressionConfig::default(),
        UniformImmunity(1.0),
    );

    let mut sim = SimBuilder::new(config, POPULATION, model)
        .activities(["educ_primary", "home", "leisure", "work"])
        .policy(build_policy())
        .build()?;

    // Half the population vaccinated, half of those boosted.
    let vaccinated: Vec<_> = sim.store.person_ids().filter(|p| p.0 % 2 == 0).collect();
    for person in vaccinated {
        sim.store.record_vaccination(person);
        if person.0 % 4 == 0 {
            sim.store.record_vaccination(person);
        }
    }

    let mut observer = DailyPrinter { regime: Regime::Open };
    let mut imports = INITIAL_CASES;

    for day in 0..SIM_DAYS {
        // Delta epidemic first, Omicron wave from spring.
        let strain = if day < 90 { VirusStrain::Delta } else { VirusStrain::OmicronBa1 };
        sim.seed_outbreak(strain, imports.round() as usize);
        sim.run_days(1, &mut observer)?;

        // The toy import process reacts to the restriction registry the
        // same way a contact model would: fewer contacts, slower growth.
        let growth = GROWTH_RATE * openness(sim.restrictions());
        imports = (imports * (1.0 + growth)).clamp(0.0, POPULATION as f64 / 100.0);
        if sim.policy.regime() == Regime::Lockdown {
            // Lockdown also cuts the import base, not just its growth.
            imports *= LOCKDOWN_DAMPING;
        }
    }

    println!(
        "total symptomatic: {}  deceased: {}",
        sim.cumulative_showing_symptoms(),
        sim.store.count_status(DiseaseStatus::Deceased),
    );
    Ok(())
}
