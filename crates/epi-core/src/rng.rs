//! Deterministic per-person and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each person gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive person IDs uniformly across the seed space.
//! This means:
//!
//! - Persons never share RNG state (no contention, no ordering dependency),
//!   so the parallel progression phase is reproducible regardless of how
//!   Rayon schedules it.
//! - Adding persons at the end of the population does not disturb the
//!   seeds of existing persons.
//! - All RNG calls are local to the owning thread; no synchronisation needed.
//!
//! # Draw discipline
//!
//! Every stochastic disease-state decision is gated by exactly one call to
//! [`PersonRng::draw`].  Keeping the per-state draw count fixed keeps the
//! per-person stream aligned across configurations, so two runs that differ
//! only in a probability constant stay draw-for-draw comparable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PersonRng ─────────────────────────────────────────────────────────────────

/// Per-person deterministic RNG.
///
/// Create one per person at simulation init; store in a parallel
/// `Vec<PersonRng>` alongside the other SoA arrays.  Streams must never be
/// shared across threads — each Rayon worker holds exclusive references to
/// its own slice of persons.
pub struct PersonRng(SmallRng);

impl PersonRng {
    /// Seed deterministically from the run's global seed and a person ID.
    pub fn new(global_seed: u64, person: PersonId) -> Self {
        let seed = global_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PersonRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform draw in `[0, 1)`.
    ///
    /// This is the single gate used by every stochastic state transition:
    /// the caller compares `draw < probability`.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (outbreak seeding, exogenous
/// imports, etc.).
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, give each worker its own `PersonRng` or derive
/// a child `SimRng` per worker.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding auxiliary streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// One uniform draw in `[0, 1)`.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
