//! Fluent builder for constructing a [`Sim`].

use epi_core::{SimConfig, SimRng};
use epi_person::{PersonRngs, PersonStore};
use epi_policy::{FixedPolicyConfig, PolicyConfig, RestrictionRegistry};
use epi_progression::TransitionModel;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — start date, total days, seed
/// - `population` — number of persons
/// - `P: TransitionModel` — the progression implementation
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.policy(c)`     | An empty fixed policy (restrictions never move)  |
/// | `.activities(v)` | No activities in the restriction registry        |
///
/// # Example
///
/// ```rust,ignore
/// let model = AntibodyTransitionModel::new(strains, config, UniformImmunity(1.0));
/// let mut sim = SimBuilder::new(sim_config, 100_000, model)
///     .activities(["home", "work", "leisure"])
///     .policy(PolicyConfig::Adaptive(adaptive_config))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: TransitionModel> {
    config:      SimConfig,
    population:  usize,
    progression: P,
    policy:      Option<PolicyConfig>,
    activities:  Vec<String>,
}

impl<P: TransitionModel> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, population: usize, progression: P) -> Self {
        Self {
            config,
            population,
            progression,
            policy: None,
            activities: Vec::new(),
        }
    }

    /// Supply the policy configuration.
    ///
    /// If not called, an empty [`FixedPolicyConfig`] is used: the registry
    /// keeps its unrestricted defaults for the whole run.
    pub fn policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Supply the activity labels the restriction registry tracks.
    ///
    /// Policy schedule entries for activities not listed here are ignored —
    /// the registry is fixed at build time.
    pub fn activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Validate inputs, seed the per-person RNG streams, initialize the
    /// policy, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        if self.population == 0 {
            return Err(SimError::Config("population must be > 0".into()));
        }
        if self.config.total_days == 0 {
            return Err(SimError::Config("total_days must be > 0".into()));
        }

        let store = PersonStore::new(self.population);
        let rngs = PersonRngs::new(self.population, self.config.seed);
        // Offset keeps the global stream independent of every person stream.
        let sim_rng = SimRng::new(self.config.seed).child(u64::MAX);

        let mut restrictions = RestrictionRegistry::from_activities(self.activities);
        let mut policy = self
            .policy
            .unwrap_or(PolicyConfig::Fixed(FixedPolicyConfig::default()))
            .into_controller();
        policy.init(self.config.start_date, &mut restrictions);

        Ok(Sim::assemble(
            self.config,
            store,
            rngs,
            self.progression,
            policy,
            restrictions,
            sim_rng,
        ))
    }
}
