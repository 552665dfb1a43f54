//! Deterministic measurement probes.
//!
//! Real probes make `time` and `memory` values unpredictable; these advance
//! by a fixed step on every reading so reports can be compared exactly.

use std::cell::Cell;
use std::time::{Duration, Instant};

use plannerbench_core::{Clock, MemoryProbe};

/// Memory probe that grows by `step` bytes per reading.
///
/// ```
/// use plannerbench_core::MemoryProbe;
/// use plannerbench_test::SteppingMemory;
///
/// let probe = SteppingMemory::new(1000, 24);
/// assert_eq!(probe.usage_bytes(), 1000);
/// assert_eq!(probe.usage_bytes(), 1024);
/// ```
#[derive(Debug)]
pub struct SteppingMemory {
    current: Cell<u64>,
    step: u64,
}

impl SteppingMemory {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }

    /// One mebibyte per reading, so each trial reports `memory = 1`.
    pub fn one_mib_per_trial() -> Self {
        Self::new(0, 1024 * 1024)
    }
}

impl MemoryProbe for SteppingMemory {
    fn usage_bytes(&self) -> u64 {
        let value = self.current.get();
        self.current.set(value + self.step);
        value
    }
}

/// Clock that advances by `step` on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    origin: Instant,
    ticks: Cell<u32>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            ticks: Cell::new(0),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let ticks = self.ticks.get();
        self.ticks.set(ticks + 1);
        self.origin + self.step * ticks
    }
}
