//! Piecewise cumulative lookup tables.
//!
//! Every empirical distribution in the simulation is a sorted list of
//! `(upper_bound, value)` rows: a draw `r` maps to the value of the
//! first row whose upper bound exceeds it. Bounds are exclusive on the
//! upper side and the final bound is exactly 1.0, so the table covers
//! all of `[0, 1)` with no gap.

use crate::error::{SimError, SimResult};

/// A validated cumulative-probability table.
#[derive(Debug, Clone)]
pub struct CumulativeTable<T> {
    name: String,
    rows: Vec<(f64, T)>,
}

impl<T: Copy> CumulativeTable<T> {
    /// Validate and build a table. Rejects tables that could leave a
    /// draw unmapped: empty tables, non-increasing bounds, bounds
    /// outside (0, 1], or a final bound short of 1.0.
    pub fn new(name: &str, rows: Vec<(f64, T)>) -> SimResult<Self> {
        let invalid = |reason: String| SimError::InvalidTable {
            table: name.to_string(),
            reason,
        };

        if rows.is_empty() {
            return Err(invalid("no rows".into()));
        }

        let mut previous = 0.0_f64;
        for (index, (bound, _)) in rows.iter().enumerate() {
            if !bound.is_finite() || *bound <= 0.0 || *bound > 1.0 {
                return Err(invalid(format!(
                    "row {index} bound {bound} outside (0, 1]"
                )));
            }
            if *bound <= previous {
                return Err(invalid(format!(
                    "row {index} bound {bound} not above previous bound {previous}"
                )));
            }
            previous = *bound;
        }

        if previous != 1.0 {
            return Err(invalid(format!(
                "final bound {previous} leaves [{previous}, 1) uncovered"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            rows,
        })
    }

    /// Map a uniform draw to its bucket value: first row with `r < bound`.
    /// The final row is a catch-all for every `r` in `[0, 1)`.
    pub fn sample(&self, r: f64) -> T {
        for (bound, value) in &self.rows {
            if r < *bound {
                return *value;
            }
        }
        // Unreachable for r in [0, 1): the last bound is 1.0.
        self.rows[self.rows.len() - 1].1
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
