//! dockside-core — discrete-event simulation of a warehouse
//! truck-unloading shift, and the Monte Carlo staffing study built on
//! top of it.
//!
//! The pieces, bottom up:
//!   - [`rng`]: deterministic uniform streams (congruential recurrence).
//!   - [`table`] / [`samplers`]: empirical distributions as validated
//!     cumulative lookup tables.
//!   - [`event`]: the time-ordered event queue with an explicit FIFO
//!     tie-break.
//!   - [`shift`]: the shift state machine — crew, waiting line, break.
//!   - [`cost`]: per-shift cost derivation.
//!   - [`engine`]: the batch runner averaging trials per crew size and
//!     picking the cheapest crew.
//!
//! The core performs no I/O while simulating and holds no global
//! state: one [`config::SimConfig`] value drives everything, and a
//! given configuration always reproduces the same
//! [`engine::StudyReport`] bit for bit.

pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod event;
pub mod rng;
pub mod samplers;
pub mod shift;
pub mod table;
pub mod types;

pub use config::SimConfig;
pub use engine::{StaffingStudy, StudyReport};
pub use error::{SimError, SimResult};
