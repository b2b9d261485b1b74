//! Distribution samplers — the three empirical distributions feeding
//! the shift simulation.
//!
//! Each sampler is a pure table lookup: a uniform draw in `[0, 1)`
//! maps to a domain quantity through a [`CumulativeTable`]. The tables
//! are configuration data; this module only validates and bundles
//! them.

use crate::{
    config::DistributionTables,
    error::{SimError, SimResult},
    table::CumulativeTable,
    types::{CrewSize, Minutes},
};
use std::collections::BTreeMap;

/// Validated sampler set for one study.
#[derive(Debug, Clone)]
pub struct Samplers {
    initial_trucks: CumulativeTable<u32>,
    interarrival:   CumulativeTable<Minutes>,
    service:        BTreeMap<CrewSize, CumulativeTable<Minutes>>,
}

impl Samplers {
    pub fn from_tables(tables: &DistributionTables) -> SimResult<Self> {
        let initial_trucks =
            CumulativeTable::new("initial_trucks", tables.initial_trucks.clone())?;
        let interarrival = CumulativeTable::new("interarrival", tables.interarrival.clone())?;

        let mut service = BTreeMap::new();
        for (crew, rows) in &tables.service {
            let table = CumulativeTable::new(&format!("service[crew={crew}]"), rows.clone())?;
            service.insert(*crew, table);
        }

        Ok(Self {
            initial_trucks,
            interarrival,
            service,
        })
    }

    /// Trucks already waiting when the shift opens.
    pub fn initial_trucks(&self, r: f64) -> u32 {
        self.initial_trucks.sample(r)
    }

    /// Minutes until the next truck arrives.
    pub fn interarrival_minutes(&self, r: f64) -> Minutes {
        self.interarrival.sample(r)
    }

    /// Service-time table for a crew size. Unknown crew sizes fail
    /// loudly rather than falling back to some nearby table.
    pub fn service_table(&self, crew: CrewSize) -> SimResult<&CumulativeTable<Minutes>> {
        self.service
            .get(&crew)
            .ok_or(SimError::UnsupportedCrewSize { crew })
    }
}
