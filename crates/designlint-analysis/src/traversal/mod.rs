//! Bounded tree traversal under a cooperative scheduler.

pub mod scheduler;
pub mod traverser;

pub use scheduler::{Deadline, Interrupt, Scheduler, ThreadYielder, Yielder};
pub use traverser::Traverser;
