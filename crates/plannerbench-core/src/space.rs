//! Space information and its state allocator.

use std::cell::RefCell;
use std::rc::Rc;

/// Pool of reusable states shared by all planners.
pub trait StateAllocator {
    /// Reserves one more state in the pool.
    fn allocate(&mut self);

    /// Releases every pre-allocated state.
    fn clear(&mut self);

    /// Number of states currently held.
    fn size(&self) -> usize;
}

/// Description of the state space planners search in.
pub trait SpaceInformation {
    fn is_configured(&self) -> bool;

    fn configure(&mut self);

    fn state_allocator(&self) -> &dyn StateAllocator;

    fn state_allocator_mut(&mut self) -> &mut dyn StateAllocator;
}

/// Shared handle to the space information.
pub type SharedSpace = Rc<RefCell<dyn SpaceInformation>>;

/// Wraps space information in a [`SharedSpace`] handle.
pub fn shared_space<S: SpaceInformation + 'static>(space: S) -> SharedSpace {
    Rc::new(RefCell::new(space))
}
