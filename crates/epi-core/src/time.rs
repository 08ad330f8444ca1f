//! Simulation time model.
//!
//! # Design
//!
//! Both engines in this workspace are driven by a single logical "simulated
//! day" tick: every person's disease state is advanced once per day, and the
//! policy controller runs once per day after the population report is
//! aggregated.  Time is therefore a monotonically increasing [`Day`]
//! counter; the mapping to calendar dates is held in [`SimClock`]:
//!
//!   date = start_date + day
//!
//! Using an integer day as the canonical time unit means all incidence and
//! schedule arithmetic is exact and comparisons are O(1).

use std::fmt;

use crate::date::SimDate;

// ── Day ──────────────────────────────────────────────────────────────────────

/// An absolute simulated-day counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between the day counter and calendar dates.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Calendar date of day 0.
    pub start_date: SimDate,
    /// The current day — advanced by `SimClock::advance()` each iteration.
    pub current_day: Day,
}

impl SimClock {
    /// Create a clock starting at `start_date`.
    pub fn new(start_date: SimDate) -> Self {
        Self { start_date, current_day: Day::ZERO }
    }

    /// Advance the clock by one day.
    #[inline]
    pub fn advance(&mut self) {
        self.current_day = Day(self.current_day.0 + 1);
    }

    /// Calendar date of the current day.
    #[inline]
    pub fn date(&self) -> SimDate {
        self.date_of(self.current_day)
    }

    /// Calendar date of an arbitrary day counter.
    #[inline]
    pub fn date_of(&self, day: Day) -> SimDate {
        self.start_date.plus_days(day.0 as i32)
    }

    /// Day counter for a calendar date on or after the start date.
    ///
    /// Returns `None` for dates before the start.
    pub fn day_of(&self, date: SimDate) -> Option<Day> {
        let delta = date - self.start_date;
        if delta < 0 { None } else { Some(Day(delta as u32)) }
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_day, self.date())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically assembled by the application crate (or deserialized from a
/// config file with the `serde` feature) and passed to the simulation
/// builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Calendar date of day 0.
    pub start_date: SimDate,

    /// Total days to simulate.
    pub total_days: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// The day at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.total_days)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_date)
    }
}
