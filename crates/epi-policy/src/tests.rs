//! Unit tests for epi-policy.

#[cfg(test)]
mod restriction {
    use crate::{MaskType, Restriction};

    #[test]
    fn merge_copies_only_set_fields() {
        let mut live = Restriction::none();
        live.merge(&Restriction::of(0.4));
        assert_eq!(live.remaining_fraction, Some(0.4));
        assert_eq!(live.ci_correction, Some(1.0)); // untouched

        live.merge(&Restriction::of_ci_correction(0.5));
        assert_eq!(live.remaining_fraction, Some(0.4)); // untouched
        assert_eq!(live.ci_correction, Some(0.5));
    }

    #[test]
    fn merge_is_idempotent() {
        let overlay = Restriction::of_mask([(MaskType::N95, 0.25), (MaskType::Surgical, 0.25)]);
        let mut once = Restriction::none();
        once.merge(&overlay);
        let mut twice = once.clone();
        twice.merge(&overlay);
        assert_eq!(once, twice);
    }

    #[test]
    fn mask_overlay_replaces_whole_map() {
        let mut live = Restriction::none();
        live.merge(&Restriction::of_mask([(MaskType::Cloth, 0.45), (MaskType::Surgical, 0.45)]));
        live.merge(&Restriction::of_mask([(MaskType::N95, 0.9)]));
        assert_eq!(live.mask_usage.len(), 1);
        assert_eq!(live.mask_usage.get(&MaskType::N95), Some(&0.9));
    }

    #[test]
    fn closing_hours_overlay() {
        let mut live = Restriction::none();
        live.merge(&Restriction::of_closing_hours(22, 6));
        assert_eq!(live.closing_hours, Some((22, 6)));
    }
}

#[cfg(test)]
mod registry {
    use epi_core::SimDate;

    use crate::{Restriction, RestrictionRegistry, RestrictionSchedule};

    fn d(s: &str) -> SimDate {
        s.parse().unwrap()
    }

    fn registry() -> RestrictionRegistry {
        RestrictionRegistry::from_activities(["home", "leisure", "work"])
    }

    #[test]
    fn starts_unrestricted() {
        let reg = registry();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(1.0));
    }

    #[test]
    fn apply_before_excludes_today_and_future() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-10"), Restriction::of(0.5), ["work"])
            .restrict(d("2021-01-14"), Restriction::of(0.2), ["work"]);

        let mut reg = registry();
        reg.apply_before(d("2021-01-14"), &schedule);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.5));

        // One day later the 01-14 entry is historical and wins.
        reg.apply_before(d("2021-01-15"), &schedule);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.2));
    }

    #[test]
    fn later_dated_overlay_wins_within_one_call() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-05"), Restriction::of(0.8), ["work"])
            .restrict(d("2021-01-10"), Restriction::of(0.5), ["work"]);

        let mut reg = registry();
        reg.apply_before(d("2021-02-01"), &schedule);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.5));
    }

    #[test]
    fn partial_policy_leaves_other_activities_untouched() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-05"), Restriction::of(0.4), ["work"]);

        let mut reg = registry();
        reg.apply_before(d("2021-02-01"), &schedule);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.4));
        assert_eq!(reg.get("leisure").unwrap().remaining_fraction, Some(1.0));
    }

    #[test]
    fn schedule_activities_missing_from_registry_are_ignored() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-05"), Restriction::of(0.4), ["educ_primary"]);

        let mut reg = registry();
        reg.apply_before(d("2021-02-01"), &schedule);
        assert!(!reg.contains("educ_primary"));
    }

    #[test]
    fn apply_before_is_idempotent() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-05"), Restriction::of(0.4), ["work", "leisure"]);

        let mut reg = registry();
        reg.apply_before(d("2021-02-01"), &schedule);
        let snapshot: Vec<_> = reg.iter().map(|(a, r)| (a.to_string(), r.clone())).collect();
        reg.apply_before(d("2021-02-01"), &schedule);
        let again: Vec<_> = reg.iter().map(|(a, r)| (a.to_string(), r.clone())).collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn apply_on_hits_exactly_one_date() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2021-01-05"), Restriction::of(0.8), ["work"])
            .restrict(d("2021-01-10"), Restriction::of(0.5), ["work"]);

        let mut reg = registry();
        reg.apply_on(d("2021-01-05"), &schedule);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.8));
        reg.apply_on(d("2021-01-07"), &schedule); // no entry that day
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.8));
    }
}

#[cfg(test)]
mod adaptive {
    use epi_core::SimDate;

    use crate::{
        AdaptivePolicy, AdaptivePolicyConfig, DailyReport, PolicyController, Regime,
        Restriction, RestrictionRegistry, RestrictionSchedule,
    };

    const POPULATION: u64 = 100_000;

    fn d(s: &str) -> SimDate {
        s.parse().unwrap()
    }

    fn policy() -> AdaptivePolicy {
        // Schedules dated far in the past so any "apply history before
        // today" call picks them up.
        let epoch = d("2020-01-01");
        AdaptivePolicy::new(AdaptivePolicyConfig {
            lockdown_trigger: 50.0,
            open_trigger: 10.0,
            lockdown_policy: RestrictionSchedule::new()
                .restrict(epoch, Restriction::of(0.45), ["work"])
                .restrict(epoch, Restriction::of(0.3), ["leisure"]),
            open_policy: RestrictionSchedule::new()
                .restrict(epoch, Restriction::of(1.0), ["work", "leisure"]),
        })
    }

    fn registry() -> RestrictionRegistry {
        RestrictionRegistry::from_activities(["home", "leisure", "work"])
    }

    /// Feed `cumulative` symptomatic counts for consecutive days starting
    /// at `start`, returning the date of the last report.
    fn feed(
        policy: &mut AdaptivePolicy,
        registry: &mut RestrictionRegistry,
        start: SimDate,
        cumulative: &[u64],
    ) -> SimDate {
        let mut date = start;
        for (i, &n) in cumulative.iter().enumerate() {
            date = start.plus_days(i as i32);
            let report = DailyReport {
                date,
                n_showing_symptoms_cumulative: n,
                n_total: POPULATION,
            };
            policy.update(&report, registry);
        }
        date
    }

    #[test]
    fn warm_up_makes_no_change() {
        let mut policy = policy();
        let mut reg = registry();
        // 6 days of huge counts: no 7-day pair exists yet.
        feed(&mut policy, &mut reg, d("2021-01-01"), &[9000; 6]);
        assert_eq!(policy.regime(), Regime::Open);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(1.0));
    }

    #[test]
    fn outbreak_on_day_14_triggers_lockdown() {
        // 13 quiet days, then 600 cumulative symptomatic per 100k:
        // the latest 7-day incidence jumps to 600 >= 50.
        let mut policy = policy();
        let mut reg = registry();

        let series = vec![0u64; 13];
        feed(&mut policy, &mut reg, d("2021-01-01"), &series);
        assert_eq!(policy.regime(), Regime::Open);

        let report = DailyReport {
            date: d("2021-01-14"),
            n_showing_symptoms_cumulative: 600,
            n_total: POPULATION,
        };
        policy.update(&report, &mut reg);

        assert_eq!(policy.regime(), Regime::Lockdown);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.45));
        assert_eq!(reg.get("leisure").unwrap().remaining_fraction, Some(0.3));
        assert_eq!(reg.get("home").unwrap().remaining_fraction, Some(1.0));
    }

    #[test]
    fn incidence_exactly_at_trigger_locks_down() {
        let mut policy = policy();
        let mut reg = registry();
        // 50 cumulative cases per 100k appearing in one day = incidence 50.
        let mut series = vec![0u64; 13];
        series.push(50);
        feed(&mut policy, &mut reg, d("2021-01-01"), &series);
        assert_eq!(policy.regime(), Regime::Lockdown);
    }

    #[test]
    fn reopens_only_after_a_full_quiet_window() {
        let mut policy = policy();
        let mut reg = registry();

        // Outbreak: 13 quiet days, lockdown on day 14.
        let mut series = vec![0u64; 13];
        series.push(600);
        // Then the cumulative count freezes (no new cases at all).
        series.extend(std::iter::repeat(600).take(19));
        let last = feed(&mut policy, &mut reg, d("2021-01-01"), &series);

        // Day 33 (2021-02-02): the window still reaches back to a pre-spike
        // date, so one pair spans the jump — still locked.
        assert_eq!(last, d("2021-02-02"));
        assert_eq!(policy.regime(), Regime::Lockdown);

        // Day 34 (2021-02-03): every pair lies on the flat plateau.
        let report = DailyReport {
            date: d("2021-02-03"),
            n_showing_symptoms_cumulative: 600,
            n_total: POPULATION,
        };
        policy.update(&report, &mut reg);
        assert_eq!(policy.regime(), Regime::Open);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(1.0));
        assert_eq!(reg.get("leisure").unwrap().remaining_fraction, Some(1.0));
    }

    #[test]
    fn single_spike_blocks_reopening() {
        let mut policy = policy();
        let mut reg = registry();

        // Lockdown on day 14, plateau after.
        let mut series = vec![0u64; 13];
        series.push(600);
        series.extend(std::iter::repeat(600).take(10)); // through 2021-01-24
        // One-day spike of 100 new cases on 2021-01-25, plateau again.
        series.extend(std::iter::repeat(700).take(19)); // through 2021-02-12
        let last = feed(&mut policy, &mut reg, d("2021-01-01"), &series);

        assert_eq!(last, d("2021-02-12"));
        assert_eq!(policy.regime(), Regime::Lockdown, "spike inside window must block reopening");

        // 2021-02-13: the pair (01-24 → 01-31) still spans the spike.
        policy.update(
            &DailyReport { date: d("2021-02-13"), n_showing_symptoms_cumulative: 700, n_total: POPULATION },
            &mut reg,
        );
        assert_eq!(policy.regime(), Regime::Lockdown);

        // 2021-02-14: the whole window is post-spike and flat — reopen.
        policy.update(
            &DailyReport { date: d("2021-02-14"), n_showing_symptoms_cumulative: 700, n_total: POPULATION },
            &mut reg,
        );
        assert_eq!(policy.regime(), Regime::Open);
    }

    #[test]
    fn incidence_exactly_at_open_trigger_counts_as_quiet() {
        let mut policy = policy();
        let mut reg = registry();

        // Lockdown, then exactly 10 new cases per 100k per 7 days:
        // cumulative grows by 10 every 7th day.
        let mut series = vec![0u64; 13];
        series.push(600);
        let mut cum = 600u64;
        for day in 0..40 {
            if day % 7 == 0 {
                cum += 10;
            }
            series.push(cum);
        }
        feed(&mut policy, &mut reg, d("2021-01-01"), &series);
        // All 7-day deltas in the late window are exactly 10 <= 10.
        assert_eq!(policy.regime(), Regime::Open);
    }
}

#[cfg(test)]
mod fixed {
    use epi_core::SimDate;

    use crate::{
        DailyReport, FixedPolicy, FixedPolicyConfig, PolicyController, Restriction,
        RestrictionRegistry, RestrictionSchedule,
    };

    fn d(s: &str) -> SimDate {
        s.parse().unwrap()
    }

    #[test]
    fn init_fast_forwards_past_entries() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2020-03-01"), Restriction::of(0.8), ["work"])
            .restrict(d("2020-03-22"), Restriction::of(0.45), ["work"])
            .restrict(d("2021-06-01"), Restriction::of(1.0), ["work"]);
        let mut policy = FixedPolicy::new(FixedPolicyConfig { schedule });

        let mut reg = RestrictionRegistry::from_activities(["work"]);
        policy.init(d("2020-03-22"), &mut reg);
        // Entries on or before the start date are in force; future ones not.
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.45));
    }

    #[test]
    fn update_applies_entries_dated_today() {
        let schedule = RestrictionSchedule::new()
            .restrict(d("2020-03-22"), Restriction::of(0.45), ["work"]);
        let mut policy = FixedPolicy::new(FixedPolicyConfig { schedule });
        let mut reg = RestrictionRegistry::from_activities(["work"]);

        let mut report = DailyReport {
            date: d("2020-03-21"),
            n_showing_symptoms_cumulative: 0,
            n_total: 1000,
        };
        policy.update(&report, &mut reg);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(1.0));

        report.date = d("2020-03-22");
        policy.update(&report, &mut reg);
        assert_eq!(reg.get("work").unwrap().remaining_fraction, Some(0.45));
    }
}

#[cfg(test)]
mod report {
    use epi_core::SimDate;

    use crate::DailyReport;

    #[test]
    fn incidence_normalizes_per_100k() {
        let report = DailyReport {
            date: SimDate::from_ymd(2021, 1, 14),
            n_showing_symptoms_cumulative: 600,
            n_total: 100_000,
        };
        assert!((report.incidence_per_100k() - 600.0).abs() < 1e-9);

        let report = DailyReport {
            date: SimDate::from_ymd(2021, 1, 14),
            n_showing_symptoms_cumulative: 50,
            n_total: 1_000_000,
        };
        assert!((report.incidence_per_100k() - 5.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;
    use std::io::Write as _;

    use epi_core::SimDate;

    use crate::{load_schedule_csv, load_schedule_reader};

    fn d(s: &str) -> SimDate {
        s.parse().unwrap()
    }

    const CSV: &str = "\
activity,date,remaining_fraction,ci_correction
work,2020-03-22,0.45,
leisure,2020-03-22,0.3,
leisure,2020-03-22,,0.5
educ_primary,2020-04-01,0.0,
";

    #[test]
    fn parses_rows_into_dated_overlays() {
        let schedule = load_schedule_reader(Cursor::new(CSV)).unwrap();

        let work = schedule.get("work").unwrap();
        assert_eq!(work[&d("2020-03-22")].remaining_fraction, Some(0.45));

        // Same activity + date rows merge into one overlay.
        let leisure = schedule.get("leisure").unwrap();
        let overlay = &leisure[&d("2020-03-22")];
        assert_eq!(overlay.remaining_fraction, Some(0.3));
        assert_eq!(overlay.ci_correction, Some(0.5));

        assert_eq!(
            schedule.get("educ_primary").unwrap()[&d("2020-04-01")].remaining_fraction,
            Some(0.0)
        );
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let csv = "activity,date,remaining_fraction,ci_correction\nwork,2020-03-22,1.5,\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_empty_rows_and_bad_dates() {
        let csv = "activity,date,remaining_fraction,ci_correction\nwork,2020-03-22,,\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());

        let csv = "activity,date,remaining_fraction,ci_correction\nwork,not-a-date,0.5,\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let schedule = load_schedule_csv(file.path()).unwrap();
        assert!(schedule.get("work").is_some());
    }
}
