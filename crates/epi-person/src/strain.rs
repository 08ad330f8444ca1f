//! Virus variants.

use std::fmt;

/// The circulating virus variants the severity model distinguishes.
///
/// A person's episode strain is set once at infection time and stays fixed
/// for that episode.  Severity multipliers per strain live in
/// `epi-progression`'s strain configuration; the only classification the
/// transition model hard-codes is the Omicron family split used by the
/// vaccine-effectiveness tiers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VirusStrain {
    /// Ancestral wild type.
    SarsCov2,
    Alpha,
    Delta,
    OmicronBa1,
    OmicronBa2,
}

impl VirusStrain {
    pub const ALL: [VirusStrain; 5] = [
        VirusStrain::SarsCov2,
        VirusStrain::Alpha,
        VirusStrain::Delta,
        VirusStrain::OmicronBa1,
        VirusStrain::OmicronBa2,
    ];

    /// `true` for Omicron-family variants (BA.1 / BA.2), which get their own
    /// vaccine-effectiveness constants in the severity model.
    #[inline]
    pub fn is_omicron(self) -> bool {
        matches!(self, VirusStrain::OmicronBa1 | VirusStrain::OmicronBa2)
    }
}

impl fmt::Display for VirusStrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VirusStrain::SarsCov2 => "SARS_CoV_2",
            VirusStrain::Alpha => "ALPHA",
            VirusStrain::Delta => "DELTA",
            VirusStrain::OmicronBa1 => "OMICRON_BA1",
            VirusStrain::OmicronBa2 => "OMICRON_BA2",
        };
        f.write_str(s)
    }
}
