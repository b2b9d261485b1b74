//! Cost derivation formulas and trial aggregation.

use dockside_core::config::SimConfig;
use dockside_core::cost::ShiftResult;
use dockside_core::shift::ShiftOutcome;
use dockside_core::StaffingStudy;

fn outcome(last_event_time: u32, wait_minutes: u64) -> ShiftOutcome {
    ShiftOutcome {
        last_event_time,
        wait_minutes,
        trucks_arrived: 1,
        trucks_served: 1,
        break_window: None,
        wait_log: Vec::new(),
    }
}

/// Worked example: crew 4, shift ends at minute 570 (one overtime
/// hour), two hours of truck waiting.
///   normal    4 * 8h * $25       = $800
///   overtime  4 * 1h * $37.50    = $150
///   waiting   2h * $100          = $200
///   operating 9.5h * $500        = $4750
#[test]
fn formulas_match_a_worked_example() {
    let config = SimConfig::default();
    let result = ShiftResult::derive(4, &outcome(570, 120), &config.rates, &config.shift);

    assert_eq!(result.normal_wage, 800.0);
    assert_eq!(result.overtime_wage, 150.0);
    assert_eq!(result.waiting_cost, 200.0);
    assert_eq!(result.operating_cost, 4_750.0);
    assert_eq!(result.total_cost, 5_900.0);
    assert_eq!(result.operating_hours, 9.5);
}

/// Finishing at or before the overtime threshold pays no overtime.
#[test]
fn no_overtime_at_or_below_the_threshold() {
    let config = SimConfig::default();
    for last in [0, 300, 509, 510] {
        let result = ShiftResult::derive(3, &outcome(last, 0), &config.rates, &config.shift);
        assert_eq!(
            result.overtime_wage, 0.0,
            "minute {last} is not past the 510-minute threshold"
        );
    }
    let result = ShiftResult::derive(3, &outcome(511, 0), &config.rates, &config.shift);
    assert!(result.overtime_wage > 0.0);
}

/// Averaging over a single trial is the identity: the crew summary
/// must equal that trial's own result exactly, field for field.
#[test]
fn single_trial_average_is_the_trial_itself() {
    let mut config = SimConfig::default();
    config.trials_per_crew = 1;
    let study = StaffingStudy::new(config).unwrap();

    let report = study.run().unwrap();
    for summary in &report.crews {
        let (_, lone) = study.run_shift(summary.crew_size, 0).unwrap();
        assert_eq!(
            summary.mean, lone,
            "crew {}: N=1 mean differs from the single trial",
            summary.crew_size
        );
    }
}

/// Every component of every shift result in the reference study is
/// non-negative, as are the trajectory quantities they derive from.
#[test]
fn all_reference_costs_are_non_negative() {
    let study = StaffingStudy::new(SimConfig::default()).unwrap();
    let config = study.config().clone();

    for &crew in &config.crew_sizes {
        for trial in 0..config.trials_per_crew {
            let (outcome, result) = study.run_shift(crew, trial).unwrap();
            let label = format!("crew {crew} trial {trial}");

            assert!(result.normal_wage >= 0.0, "{label}: normal wage");
            assert!(result.overtime_wage >= 0.0, "{label}: overtime wage");
            assert!(result.waiting_cost >= 0.0, "{label}: waiting cost");
            assert!(result.operating_cost >= 0.0, "{label}: operating cost");
            assert!(result.total_cost >= 0.0, "{label}: total cost");
            assert!(result.operating_hours >= 0.0, "{label}: operating hours");
            assert!(
                outcome.last_event_time >= config.shift.break_offset_min,
                "{label}: shift ended before the break was even due"
            );
        }
    }
}
