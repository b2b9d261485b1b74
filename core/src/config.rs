//! Study configuration.
//!
//! RULE: there are no module-level tunables anywhere in the core. One
//! `SimConfig` value is handed to the batch runner and propagated down
//! to every shift; the defaults below are the reference warehouse
//! problem (crews 3..6, 60 trials, the published empirical tables).

use crate::{
    error::{SimError, SimResult},
    rng::LcgParams,
    samplers::Samplers,
    shift::BreakPolicy,
    types::{CrewSize, Minutes},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Timing constants of one shift, all in minutes unless noted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShiftParams {
    /// When the crew's break becomes due.
    pub break_offset_min:   Minutes,
    /// How long the break lasts once it begins.
    pub break_duration_min: Minutes,
    /// Last minute (inclusive) at which a processed arrival schedules
    /// the next one.
    pub arrival_cutoff_min: Minutes,
    /// Minutes worked past this point count as overtime.
    pub overtime_after_min: Minutes,
    /// Hours paid at the normal rate regardless of shift length.
    pub paid_shift_hours:   f64,
}

/// Hourly dollar rates feeding cost derivation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostRates {
    pub hourly_normal:       f64,
    pub hourly_overtime:     f64,
    pub hourly_wait_penalty: f64,
    pub hourly_operating:    f64,
}

/// Raw cumulative tables as configured; validated into
/// [`Samplers`](crate::samplers::Samplers) at study build time.
/// Each row is `(cumulative upper bound, value)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionTables {
    pub initial_trucks: Vec<(f64, u32)>,
    pub interarrival:   Vec<(f64, Minutes)>,
    pub service:        BTreeMap<CrewSize, Vec<(f64, Minutes)>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub lcg:             LcgParams,
    pub crew_sizes:      Vec<CrewSize>,
    pub trials_per_crew: u32,
    pub shift:           ShiftParams,
    pub rates:           CostRates,
    pub tables:          DistributionTables,
    #[serde(default)]
    pub break_policy:    BreakPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        let mut service = BTreeMap::new();
        service.insert(
            3,
            vec![
                (0.05, 20),
                (0.15, 25),
                (0.35, 30),
                (0.60, 35),
                (0.72, 40),
                (0.82, 45),
                (0.90, 50),
                (0.96, 55),
                (1.0, 60),
            ],
        );
        service.insert(
            4,
            vec![
                (0.05, 15),
                (0.20, 20),
                (0.40, 25),
                (0.60, 30),
                (0.75, 35),
                (0.87, 40),
                (0.95, 45),
                (0.99, 50),
                (1.0, 55),
            ],
        );
        service.insert(
            5,
            vec![
                (0.10, 10),
                (0.28, 15),
                (0.50, 20),
                (0.68, 25),
                (0.78, 30),
                (0.86, 35),
                (0.92, 40),
                (0.97, 45),
                (1.0, 50),
            ],
        );
        service.insert(
            6,
            vec![
                (0.12, 5),
                (0.27, 10),
                (0.53, 15),
                (0.68, 20),
                (0.80, 25),
                (0.88, 30),
                (0.94, 35),
                (0.98, 40),
                (1.0, 45),
            ],
        );

        Self {
            lcg: LcgParams {
                multiplier: 9600,
                modulus:    32057,
                base_seed:  20855,
            },
            crew_sizes: vec![3, 4, 5, 6],
            trials_per_crew: 60,
            shift: ShiftParams {
                break_offset_min:   180,
                break_duration_min: 30,
                arrival_cutoff_min: 510,
                overtime_after_min: 510,
                paid_shift_hours:   8.0,
            },
            rates: CostRates {
                hourly_normal:       25.0,
                hourly_overtime:     37.5,
                hourly_wait_penalty: 100.0,
                hourly_operating:    500.0,
            },
            tables: DistributionTables {
                initial_trucks: vec![(0.50, 0), (0.75, 1), (0.90, 2), (1.0, 3)],
                interarrival: vec![
                    (0.02, 20),
                    (0.10, 25),
                    (0.22, 30),
                    (0.47, 35),
                    (0.67, 40),
                    (0.82, 45),
                    (0.92, 50),
                    (0.97, 55),
                    (1.0, 60),
                ],
                service,
            },
            break_policy: BreakPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Validate everything detectable before a single event is
    /// scheduled. An invalid configuration aborts the whole study — no
    /// partial results.
    pub fn validate(&self) -> SimResult<()> {
        if self.trials_per_crew == 0 {
            return Err(SimError::InvalidParameter {
                name:   "trials_per_crew",
                reason: "must be positive".into(),
            });
        }
        if self.crew_sizes.is_empty() {
            return Err(SimError::InvalidParameter {
                name:   "crew_sizes",
                reason: "no candidate crew sizes to evaluate".into(),
            });
        }
        if self.lcg.modulus < 2 {
            return Err(SimError::InvalidParameter {
                name:   "lcg.modulus",
                reason: format!("{} leaves no usable cycle", self.lcg.modulus),
            });
        }
        if self.lcg.multiplier == 0 || self.lcg.multiplier >= self.lcg.modulus {
            return Err(SimError::InvalidParameter {
                name:   "lcg.multiplier",
                reason: format!(
                    "{} not in 1..{} (mod {})",
                    self.lcg.multiplier, self.lcg.modulus, self.lcg.modulus
                ),
            });
        }
        if self.lcg.base_seed % self.lcg.modulus == 0 {
            return Err(SimError::InvalidParameter {
                name:   "lcg.base_seed",
                reason: "seed 0 mod m degenerates to the all-zero cycle".into(),
            });
        }

        // Builds every table, surfacing any coverage/monotonicity
        // defect with the table's name attached.
        let samplers = Samplers::from_tables(&self.tables)?;
        for crew in &self.crew_sizes {
            samplers.service_table(*crew)?;
        }

        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
