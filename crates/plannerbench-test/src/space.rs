//! Counting state pool fixture.

use plannerbench_core::{SpaceInformation, StateAllocator};

/// Allocator that only counts how many states it holds.
#[derive(Debug, Default)]
pub struct PoolAllocator {
    held: usize,
    clears: usize,
}

impl PoolAllocator {
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl StateAllocator for PoolAllocator {
    fn allocate(&mut self) {
        self.held += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.held = 0;
    }

    fn size(&self) -> usize {
        self.held
    }
}

/// Space information owning a [`PoolAllocator`].
#[derive(Debug, Default)]
pub struct PoolSpace {
    configured: bool,
    configures: usize,
    allocator: PoolAllocator,
}

impl PoolSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `configure` ran.
    pub fn configures(&self) -> usize {
        self.configures
    }

    pub fn allocator(&self) -> &PoolAllocator {
        &self.allocator
    }
}

impl SpaceInformation for PoolSpace {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn configure(&mut self) {
        self.configures += 1;
        self.configured = true;
    }

    fn state_allocator(&self) -> &dyn StateAllocator {
        &self.allocator
    }

    fn state_allocator_mut(&mut self) -> &mut dyn StateAllocator {
        &mut self.allocator
    }
}
