//! Linux `/proc/self/status` resident-set readings.

use super::MemorySampler;
use crate::error::ProfilingError;

const CURRENT_FIELD: &str = "VmRSS";
const PEAK_FIELD: &str = "VmHWM";
const KIBIBYTE: u64 = 1024;

/// Reads `VmRSS` and `VmHWM` from `/proc/self/status`.
///
/// On other platforms every reading fails with
/// [`ProfilingError::UnsupportedPlatform`]; no value is ever synthesised.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcStatusSampler;

impl MemorySampler for ProcStatusSampler {
    fn current_resident_bytes(&self) -> Result<u64, ProfilingError> {
        read_status_field(CURRENT_FIELD)
    }

    fn peak_resident_bytes(&self) -> Result<u64, ProfilingError> {
        read_status_field(PEAK_FIELD)
    }
}

#[cfg(target_os = "linux")]
fn read_status_field(field: &'static str) -> Result<u64, ProfilingError> {
    let status = std::fs::read_to_string("/proc/self/status")?;
    parse_status_field(&status, field)
}

#[cfg(not(target_os = "linux"))]
fn read_status_field(_field: &'static str) -> Result<u64, ProfilingError> {
    Err(ProfilingError::UnsupportedPlatform {
        os: std::env::consts::OS,
    })
}

/// Extracts `field` from a `/proc/self/status` dump and converts its
/// kibibyte value to bytes. A missing unit is read as `kB`.
#[cfg_attr(
    not(any(target_os = "linux", test)),
    expect(dead_code, reason = "only Linux exposes /proc/self/status")
)]
fn parse_status_field(status: &str, field: &'static str) -> Result<u64, ProfilingError> {
    let mut tokens = status
        .lines()
        .find_map(|line| line.strip_prefix(field)?.strip_prefix(':'))
        .ok_or(ProfilingError::MissingProcField { field })?
        .split_whitespace();
    let amount = tokens
        .next()
        .ok_or(ProfilingError::MissingProcField { field })?;
    if let Some(unit) = tokens.next().filter(|&unit| unit != "kB") {
        return Err(ProfilingError::UnsupportedProcUnit {
            field,
            unit: unit.to_owned(),
        });
    }
    amount
        .parse::<u64>()
        .map_err(|_| ProfilingError::InvalidProcField {
            field,
            value: amount.to_owned(),
        })?
        .checked_mul(KIBIBYTE)
        .ok_or(ProfilingError::Overflow { context: field })
}
