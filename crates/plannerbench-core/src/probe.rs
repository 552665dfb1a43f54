//! Measurement probes used around each solve.

use std::fs;
use std::time::Instant;

/// Reports the current memory footprint of the process.
pub trait MemoryProbe {
    /// Current usage in bytes.
    fn usage_bytes(&self) -> u64;
}

/// Resident set size of the running process.
///
/// Reads `VmRSS` from `/proc/self/status`. Reports 0 on platforms without
/// procfs, which makes every memory delta 0 there.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemory;

impl MemoryProbe for ProcessMemory {
    fn usage_bytes(&self) -> u64 {
        fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_vm_rss(&status))
            .unwrap_or(0)
    }
}

fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kib: u64 = line
        .trim_start_matches("VmRSS:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kib * 1024)
}

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Seconds elapsed between two points taken from this clock.
    fn seconds_between(&self, start: Instant, end: Instant) -> f64 {
        end.saturating_duration_since(start).as_secs_f64()
    }
}

/// Wall-clock [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests;
