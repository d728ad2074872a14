//! Deadlines, cancellation checkpoints and explicit yield points.
//!
//! Nothing here preempts: long work calls `checkpoint()` often enough that
//! losing the race against the deadline is noticed promptly.

use std::time::{Duration, Instant};

use designlint_core::traits::Cancellable;

/// A fixed budget measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

/// Why a checkpoint refused to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Timeout,
    Cancelled,
}

/// Hands control back to the host between batches.
pub trait Yielder: Send + Sync {
    fn yield_now(&self);
}

/// Default yielder: gives up the rest of the current time slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadYielder;

impl Yielder for ThreadYielder {
    fn yield_now(&self) {
        std::thread::yield_now();
    }
}

/// Deadline + cancellation + yield hook for one unit of work.
pub struct Scheduler<'a> {
    deadline: Deadline,
    cancel: &'a dyn Cancellable,
    yielder: &'a dyn Yielder,
    yields: usize,
}

impl<'a> Scheduler<'a> {
    pub fn new(deadline: Deadline, cancel: &'a dyn Cancellable, yielder: &'a dyn Yielder) -> Self {
        Self {
            deadline,
            cancel,
            yielder,
            yields: 0,
        }
    }

    /// Cancellation wins over timeout when both apply.
    pub fn checkpoint(&self) -> Result<(), Interrupt> {
        if self.cancel.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }
        if self.deadline.is_expired() {
            return Err(Interrupt::Timeout);
        }
        Ok(())
    }

    pub fn yield_now(&mut self) {
        self.yields += 1;
        self.yielder.yield_now();
    }

    pub fn yields(&self) -> usize {
        self.yields
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn cancellation(&self) -> &'a dyn Cancellable {
        self.cancel
    }
}
