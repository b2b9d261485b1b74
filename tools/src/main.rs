//! dock-runner: headless runner for the truck-unloading staffing study.
//!
//! Usage:
//!   dock-runner
//!   dock-runner --seed 20855 --trials 60
//!   dock-runner --config study.json --json

use anyhow::Result;
use dockside_core::{SimConfig, StaffingStudy, StudyReport};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");

    let mut config = match arg_value(&args, "--config") {
        Some(path) => {
            log::info!("loading configuration from {path}");
            SimConfig::from_json_file(path)?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = arg_value(&args, "--seed") {
        config.lcg.base_seed = seed.parse()?;
    }
    if let Some(trials) = arg_value(&args, "--trials") {
        config.trials_per_crew = trials.parse()?;
    }

    let study = StaffingStudy::new(config)?;
    let report = study.run()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&study, &report);
    }

    Ok(())
}

fn arg_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

fn print_report(study: &StaffingStudy, report: &StudyReport) {
    let config = study.config();
    println!("Truck-unloading staffing study");
    println!("  seed:    {}", config.lcg.base_seed);
    println!("  trials:  {} per crew size", config.trials_per_crew);
    println!();
    println!("Crew | Normal wage | Overtime wage | Waiting cost | Operating | Total");
    println!("-----+-------------+---------------+--------------+-----------+----------");
    for summary in &report.crews {
        let m = &summary.mean;
        println!(
            "{:4} | ${:>10.2} | ${:>12.2} | ${:>11.2} | ${:>8.2} | ${:>8.2}",
            summary.crew_size,
            m.normal_wage,
            m.overtime_wage,
            m.waiting_cost,
            m.operating_cost,
            m.total_cost
        );
    }
    println!();

    let best = report
        .crews
        .iter()
        .find(|s| s.crew_size == report.best_crew)
        .expect("best crew comes from the summary list");
    println!("Optimal crew size: {} workers", report.best_crew);
    println!("Mean cost per shift: ${:.2}", best.mean.total_cost);
    println!(
        "Mean operating hours: {:.2}",
        best.mean.operating_hours
    );
}
