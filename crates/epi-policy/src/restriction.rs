//! Per-activity restriction values.

use std::collections::BTreeMap;
use std::fmt;

// ── MaskType ──────────────────────────────────────────────────────────────────

/// Mask categories a mandate can prescribe, in increasing filtration order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskType {
    Cloth,
    Surgical,
    N95,
}

// ── Restriction ───────────────────────────────────────────────────────────────

/// The restriction state of one activity.
///
/// A `Restriction` doubles as the *live* value in the registry and as a
/// dated *overlay* inside a [`RestrictionSchedule`][crate::RestrictionSchedule]:
/// overlays leave every field they don't prescribe unset, and
/// [`merge`][Self::merge] copies only the set fields onto the live value.
/// Merging the same overlay twice is therefore a no-op.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restriction {
    /// Fraction of the activity's usual participation that still takes
    /// place, in `[0, 1]`.  `1.0` = unrestricted, `0.0` = closed.
    pub remaining_fraction: Option<f64>,

    /// Contact-intensity correction: scales the per-contact infection
    /// intensity of the activity (ventilation, distancing, plexiglass).
    pub ci_correction: Option<f64>,

    /// Fraction of participants wearing each mask type.  An overlay with a
    /// non-empty map replaces the live map wholesale.
    pub mask_usage: BTreeMap<MaskType, f64>,

    /// Closed daily between `(from_hour, to_hour)`, half-open `[from, to)`.
    pub closing_hours: Option<(u8, u8)>,
}

impl Restriction {
    /// The unrestricted value every activity starts from.
    pub fn none() -> Restriction {
        Restriction {
            remaining_fraction: Some(1.0),
            ci_correction: Some(1.0),
            mask_usage: BTreeMap::new(),
            closing_hours: None,
        }
    }

    /// Overlay prescribing only a participation fraction.
    pub fn of(remaining_fraction: f64) -> Restriction {
        debug_assert!(
            (0.0..=1.0).contains(&remaining_fraction),
            "remaining_fraction out of range: {remaining_fraction}"
        );
        Restriction { remaining_fraction: Some(remaining_fraction), ..Restriction::default() }
    }

    /// Overlay prescribing only a contact-intensity correction.
    pub fn of_ci_correction(ci_correction: f64) -> Restriction {
        Restriction { ci_correction: Some(ci_correction), ..Restriction::default() }
    }

    /// Overlay prescribing only mask usage fractions.
    pub fn of_mask<I>(usage: I) -> Restriction
    where
        I: IntoIterator<Item = (MaskType, f64)>,
    {
        Restriction { mask_usage: usage.into_iter().collect(), ..Restriction::default() }
    }

    /// Overlay prescribing only closing hours (`[from, to)`).
    pub fn of_closing_hours(from_hour: u8, to_hour: u8) -> Restriction {
        debug_assert!(from_hour < 24 && to_hour <= 24, "closing hours out of range");
        Restriction { closing_hours: Some((from_hour, to_hour)), ..Restriction::default() }
    }

    /// Copy every field `overlay` sets onto `self`; unset fields are left
    /// untouched.
    pub fn merge(&mut self, overlay: &Restriction) {
        if let Some(f) = overlay.remaining_fraction {
            self.remaining_fraction = Some(f);
        }
        if let Some(ci) = overlay.ci_correction {
            self.ci_correction = Some(ci);
        }
        if !overlay.mask_usage.is_empty() {
            self.mask_usage = overlay.mask_usage.clone();
        }
        if let Some(hours) = overlay.closing_hours {
            self.closing_hours = Some(hours);
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.remaining_fraction {
            Some(frac) => write!(f, "{:.0}%", frac * 100.0),
            None => f.write_str("-"),
        }
    }
}
