//! Cost accounting — turns a drained shift's trajectory into money.
//!
//! This module is REACTIVE. It schedules nothing and draws nothing; it
//! observes a [`ShiftOutcome`] and applies the configured rates.

use crate::{
    config::{CostRates, ShiftParams},
    shift::ShiftOutcome,
    types::CrewSize,
};
use serde::{Deserialize, Serialize};

/// Per-shift cost breakdown. Derived once, immutable, then summed and
/// averaged across trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftResult {
    pub normal_wage:     f64,
    pub overtime_wage:   f64,
    pub waiting_cost:    f64,
    pub operating_cost:  f64,
    pub total_cost:      f64,
    pub operating_hours: f64,
}

impl ShiftResult {
    /// Apply the cost formulas to one shift trajectory:
    ///   normal wage    = crew * paid shift hours * normal rate
    ///   overtime wage  = crew * overtime hours * overtime rate
    ///   waiting cost   = waiting hours * wait penalty
    ///   operating cost = operating hours * operating rate
    pub fn derive(
        crew: CrewSize,
        outcome: &ShiftOutcome,
        rates: &CostRates,
        params: &ShiftParams,
    ) -> Self {
        let operating_hours = outcome.last_event_time as f64 / 60.0;
        let overtime_minutes =
            outcome.last_event_time.saturating_sub(params.overtime_after_min) as f64;

        let normal_wage = crew as f64 * params.paid_shift_hours * rates.hourly_normal;
        let overtime_wage = crew as f64 * (overtime_minutes / 60.0) * rates.hourly_overtime;
        let waiting_cost = (outcome.wait_minutes as f64 / 60.0) * rates.hourly_wait_penalty;
        let operating_cost = rates.hourly_operating * operating_hours;

        Self {
            normal_wage,
            overtime_wage,
            waiting_cost,
            operating_cost,
            total_cost: normal_wage + overtime_wage + waiting_cost + operating_cost,
            operating_hours,
        }
    }

    pub fn zero() -> Self {
        Self {
            normal_wage:     0.0,
            overtime_wage:   0.0,
            waiting_cost:    0.0,
            operating_cost:  0.0,
            total_cost:      0.0,
            operating_hours: 0.0,
        }
    }

    /// Field-wise accumulation, for trial aggregation.
    pub fn accumulate(&mut self, other: &ShiftResult) {
        self.normal_wage += other.normal_wage;
        self.overtime_wage += other.overtime_wage;
        self.waiting_cost += other.waiting_cost;
        self.operating_cost += other.operating_cost;
        self.total_cost += other.total_cost;
        self.operating_hours += other.operating_hours;
    }

    /// Field-wise mean of an accumulated sum over `trials` shifts.
    pub fn averaged(mut self, trials: u32) -> Self {
        let n = trials as f64;
        self.normal_wage /= n;
        self.overtime_wage /= n;
        self.waiting_cost /= n;
        self.operating_cost /= n;
        self.total_cost /= n;
        self.operating_hours /= n;
        self
    }
}
