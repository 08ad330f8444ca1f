//! Per-episode status history.
//!
//! The progression model asks two questions about a person's past:
//!
//! 1. "Has this person ever been in state X this episode?" — answered in
//!    O(1) from a bitmask instead of scanning a list.
//! 2. "On which day did the person first enter state X?" — answered from a
//!    small append-only log of `(status, day-first-entered)` pairs.
//!
//! The history covers the *current* infection episode only: the
//! `Recovered → Susceptible` edge wipes it, so protection inferred from a
//! past severe course does not leak across episodes.  Cross-episode memory
//! (vaccination and infection counters) lives in `PersonStore`, not here.

use epi_core::Day;

use crate::DiseaseStatus;

/// Append-only status log plus O(1) membership bitmask for one episode.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusHistory {
    /// One bit per `DiseaseStatus` (see [`DiseaseStatus::bit`]).
    mask: u16,
    /// First-entry day per status, in entry order.  At most one entry per
    /// status per episode, so the Vec stays tiny (≤ 8 entries).
    log: Vec<(DiseaseStatus, Day)>,
}

impl StatusHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `status` was entered on `day`.
    ///
    /// Re-entering a status already present this episode is a no-op: the
    /// log keeps the *first* entry day.
    pub fn record(&mut self, status: DiseaseStatus, day: Day) {
        if self.mask & status.bit() == 0 {
            self.mask |= status.bit();
            self.log.push((status, day));
        }
    }

    /// O(1): was `status` ever entered this episode?
    #[inline]
    pub fn had_status(&self, status: DiseaseStatus) -> bool {
        self.mask & status.bit() != 0
    }

    /// Day the person first entered `status` this episode, if ever.
    pub fn day_entered(&self, status: DiseaseStatus) -> Option<Day> {
        self.log.iter().find(|(s, _)| *s == status).map(|&(_, d)| d)
    }

    /// Days elapsed since the person first entered `status`, as of `day`.
    ///
    /// `None` if the status was never entered this episode or lies in the
    /// future of `day`.
    pub fn days_since(&self, status: DiseaseStatus, day: Day) -> Option<u32> {
        let entered = self.day_entered(status)?;
        if entered > day { None } else { Some(day - entered) }
    }

    /// Wipe the episode — called on the `Recovered → Susceptible` edge.
    pub fn clear(&mut self) {
        self.mask = 0;
        self.log.clear();
    }

    /// Read-only view of the `(status, first-entry day)` log.
    pub fn entries(&self) -> &[(DiseaseStatus, Day)] {
        &self.log
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
