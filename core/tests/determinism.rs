//! Reproducibility: a configuration fully determines every number the
//! study produces.

use dockside_core::{SimConfig, StaffingStudy};

/// Two independently built studies over the same configuration produce
/// bit-identical shift results and reports.
#[test]
fn identical_configs_reproduce_identical_results() {
    let first = StaffingStudy::new(SimConfig::default()).unwrap();
    let second = StaffingStudy::new(SimConfig::default()).unwrap();

    for &crew in &[3u8, 4, 5, 6] {
        for trial in [0u32, 17, 59] {
            let (outcome_a, result_a) = first.run_shift(crew, trial).unwrap();
            let (outcome_b, result_b) = second.run_shift(crew, trial).unwrap();
            assert_eq!(outcome_a, outcome_b, "crew {crew} trial {trial}: trajectory differs");
            assert_eq!(result_a, result_b, "crew {crew} trial {trial}: costs differ");
        }
    }

    let report_a = first.run().unwrap();
    let report_b = second.run().unwrap();
    assert_eq!(report_a.best_crew, report_b.best_crew);
    assert_eq!(
        serde_json::to_string(&report_a).unwrap(),
        serde_json::to_string(&report_b).unwrap(),
        "full reports must serialize identically"
    );
}

/// Crew 3, trial 0 of the reference configuration, worked through by
/// hand from the congruential sequence: seeds 23855 (arrivals) and
/// 1798 (service), 46 trucks, 24860 waiting minutes, last event at
/// minute 1695.
#[test]
fn reference_trial_matches_known_trajectory() {
    let study = StaffingStudy::new(SimConfig::default()).unwrap();
    let (outcome, result) = study.run_shift(3, 0).unwrap();

    assert_eq!(outcome.trucks_arrived, 46);
    assert_eq!(outcome.trucks_served, 46);
    assert_eq!(outcome.wait_minutes, 24_860);
    assert_eq!(outcome.last_event_time, 1_695);

    assert_eq!(result.normal_wage, 600.0);
    assert!((result.operating_hours - 28.25).abs() < 1e-12);
    assert!((result.overtime_wage - 2_221.875).abs() < 1e-9);
    assert!((result.total_cost - 58_380.208_333_333_33).abs() < 1e-6);
}

/// Study-level means for the reference configuration, and the arg-min.
/// The per-crew mean totals were computed once from the reference
/// streams; the bigger crews win on waiting and overtime by more than
/// their extra wages cost.
#[test]
fn reference_study_means_and_argmin() {
    let study = StaffingStudy::new(SimConfig::default()).unwrap();
    let report = study.run().unwrap();

    let expected = [
        (3u8, 26_794.097_222_222_223),
        (4, 20_018.888_888_888_887),
        (5, 15_808.975_694_444_443),
        (6, 12_199.062_5),
    ];
    assert_eq!(report.crews.len(), expected.len());
    for (summary, (crew, mean_total)) in report.crews.iter().zip(expected) {
        assert_eq!(summary.crew_size, crew);
        assert_eq!(summary.trials, 60);
        assert!(
            (summary.mean.total_cost - mean_total).abs() < 1e-6,
            "crew {crew}: mean total {} != {mean_total}",
            summary.mean.total_cost
        );
    }

    assert_eq!(report.best_crew, 6);
}

/// Different trials draw from different streams: the first few shifts
/// of one crew must not all coincide.
#[test]
fn trials_are_not_degenerate_copies() {
    let study = StaffingStudy::new(SimConfig::default()).unwrap();
    let mut totals = Vec::new();
    for trial in 0..10 {
        let (_, result) = study.run_shift(3, trial).unwrap();
        totals.push(result.total_cost);
    }
    totals.dedup();
    assert!(totals.len() > 1, "ten trials produced one repeated cost: {totals:?}");
}
