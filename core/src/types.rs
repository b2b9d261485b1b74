//! Shared primitive types used across the entire simulation.

/// Simulation time, in minutes since the start of the shift.
/// Every generated offset (inter-arrival, service, break) is an
/// integral minute count, so the clock axis is integer-valued.
pub type Minutes = u32;

/// Number of workers assigned to the unloading crew.
pub type CrewSize = u8;

/// A congruential-generator seed or state value.
pub type Seed = u64;
