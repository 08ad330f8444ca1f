//! Disease and vaccination status enums.

use std::fmt;

// ── DiseaseStatus ─────────────────────────────────────────────────────────────

/// Health state of one person.
///
/// One infection episode runs through the strict progression
///
/// ```text
/// Susceptible → InfectedButNotContagious → Contagious → ShowingSymptoms
///             → SeriouslySick → Critical → SeriouslySickAfterCritical
///             → Recovered → Susceptible (next episode)
/// ```
///
/// with short-circuits to `Recovered` from every stochastic state and a
/// terminal `Deceased` exit from `Critical`.  The transition rules live in
/// `epi-progression`; this enum only carries the states and cheap
/// classification helpers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseStatus {
    #[default]
    Susceptible,
    InfectedButNotContagious,
    Contagious,
    ShowingSymptoms,
    SeriouslySick,
    Critical,
    SeriouslySickAfterCritical,
    Recovered,
    /// Terminal: no further transitions are ever evaluated.
    Deceased,
}

impl DiseaseStatus {
    /// All states, in progression order.  Index = [`bit`][Self::bit] position.
    pub const ALL: [DiseaseStatus; 9] = [
        DiseaseStatus::Susceptible,
        DiseaseStatus::InfectedButNotContagious,
        DiseaseStatus::Contagious,
        DiseaseStatus::ShowingSymptoms,
        DiseaseStatus::SeriouslySick,
        DiseaseStatus::Critical,
        DiseaseStatus::SeriouslySickAfterCritical,
        DiseaseStatus::Recovered,
        DiseaseStatus::Deceased,
    ];

    /// Bit position for [`StatusHistory`][crate::StatusHistory] bitmask use.
    #[inline(always)]
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// `true` while the person carries an active infection episode —
    /// i.e. the daily progression model must be evaluated for them.
    ///
    /// `Susceptible` persons have nothing to progress; `Deceased` is
    /// terminal.
    #[inline]
    pub fn needs_transition(self) -> bool {
        !matches!(self, DiseaseStatus::Susceptible | DiseaseStatus::Deceased)
    }

    /// `true` for states in which the person can infect others.  Read by
    /// contact/transmission collaborators, not by this workspace's engines.
    #[inline]
    pub fn is_contagious(self) -> bool {
        matches!(
            self,
            DiseaseStatus::Contagious
                | DiseaseStatus::ShowingSymptoms
                | DiseaseStatus::SeriouslySick
                | DiseaseStatus::Critical
                | DiseaseStatus::SeriouslySickAfterCritical
        )
    }
}

impl fmt::Display for DiseaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiseaseStatus::Susceptible => "susceptible",
            DiseaseStatus::InfectedButNotContagious => "infectedButNotContagious",
            DiseaseStatus::Contagious => "contagious",
            DiseaseStatus::ShowingSymptoms => "showingSymptoms",
            DiseaseStatus::SeriouslySick => "seriouslySick",
            DiseaseStatus::Critical => "critical",
            DiseaseStatus::SeriouslySickAfterCritical => "seriouslySickAfterCritical",
            DiseaseStatus::Recovered => "recovered",
            DiseaseStatus::Deceased => "deceased",
        };
        f.write_str(s)
    }
}

// ── VaccinationStatus ─────────────────────────────────────────────────────────

/// Whether a person has received at least one effective vaccination.
///
/// Flipped to `Yes` by the (external) vaccination engine via
/// [`PersonStore::record_vaccination`][crate::PersonStore::record_vaccination];
/// read-only for the progression engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VaccinationStatus {
    #[default]
    No,
    Yes,
}
