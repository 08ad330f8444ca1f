//! CSV restriction-schedule loader.
//!
//! # CSV format
//!
//! One row per dated overlay.  `remaining_fraction` and `ci_correction`
//! may each be empty; a row must set at least one of them.
//!
//! ```csv
//! activity,date,remaining_fraction,ci_correction
//! work,2020-03-22,0.45,
//! leisure,2020-03-22,0.3,
//! leisure,2020-03-22,,0.5
//! educ_primary,2020-04-01,0.0,
//! ```
//!
//! Mask mandates and closing hours are richer than a flat CSV row and are
//! assembled in scenario code via the
//! [`RestrictionSchedule`][crate::RestrictionSchedule] builders instead.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PolicyError, PolicyResult};
use crate::restriction::Restriction;
use crate::schedule::RestrictionSchedule;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    activity:           String,
    date:               String,
    remaining_fraction: Option<f64>,
    ci_correction:      Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RestrictionSchedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> PolicyResult<RestrictionSchedule> {
    let file = std::fs::File::open(path).map_err(PolicyError::Io)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// scenario data.
pub fn load_schedule_reader<R: Read>(reader: R) -> PolicyResult<RestrictionSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut schedule = RestrictionSchedule::new();

    for result in csv_reader.deserialize::<ScheduleRecord>() {
        let row = result.map_err(|e| PolicyError::Parse(e.to_string()))?;

        let date = row
            .date
            .parse()
            .map_err(|e| PolicyError::Parse(format!("activity {:?}: {e}", row.activity)))?;

        let mut overlay = Restriction::default();
        if let Some(fraction) = row.remaining_fraction {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(PolicyError::Parse(format!(
                    "activity {:?} on {}: remaining_fraction {fraction} out of [0, 1]",
                    row.activity, row.date
                )));
            }
            overlay.remaining_fraction = Some(fraction);
        }
        if let Some(ci) = row.ci_correction {
            overlay.ci_correction = Some(ci);
        }
        if overlay == Restriction::default() {
            return Err(PolicyError::Parse(format!(
                "activity {:?} on {}: row sets no restriction fields",
                row.activity, row.date
            )));
        }

        schedule.add(row.activity, date, overlay);
    }

    Ok(schedule)
}
