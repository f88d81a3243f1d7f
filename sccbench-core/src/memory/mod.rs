//! Process resident-memory sampling.
//!
//! The memory sweep depends on [`MemorySampler`] rather than on `/proc`
//! directly so tests can substitute deterministic readings.

mod proc_status;

use crate::error::ProfilingError;

pub use proc_status::ProcStatusSampler;

/// Source of process resident-set readings, in bytes.
pub trait MemorySampler {
    /// Resident set size right now.
    ///
    /// # Errors
    /// Returns [`ProfilingError`] when the platform reading fails.
    fn current_resident_bytes(&self) -> Result<u64, ProfilingError>;

    /// High-water mark of the resident set since process start.
    ///
    /// # Errors
    /// Returns [`ProfilingError`] when the platform reading fails.
    fn peak_resident_bytes(&self) -> Result<u64, ProfilingError>;
}
