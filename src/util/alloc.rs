use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A test instrument which bumps a shared counter each time an instance is dropped. Clones share
/// the counter, so filling a container with clones and dropping it counts every element drop.
#[derive(Debug, Default, Clone)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    #[allow(unused)]
    pub fn new() -> DropTally {
        DropTally(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far and resets the count to 0.
    #[allow(unused)]
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
