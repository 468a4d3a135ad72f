//! Hooks through which a host follows a running search, typically to redraw the grid.
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cell::Role;
use crate::grid::Grid;
use crate::position::Position;

/// A single role change made by the search.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a> {
    /// The grid right after the change.
    pub grid: &'a Grid,
    pub position: Position,
    pub role: Role,
}

/// Receives a [Step] after every role change the search makes. Observers only get shared access
/// to the grid and should return quickly; they have no influence on the result other than being
/// able to cancel the search through [cancelled](Self::cancelled).
pub trait StepObserver {
    fn on_step(&mut self, step: &Step<'_>);

    /// Polled once per expansion. Returning [true] stops the search with
    /// [SearchOutcome::Cancelled](crate::SearchOutcome::Cancelled).
    fn cancelled(&self) -> bool {
        false
    }
}

impl<F> StepObserver for F
where
    F: FnMut(&Step<'_>),
{
    fn on_step(&mut self, step: &Step<'_>) {
        self(step)
    }
}

/// Observer for callers that only care about the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _: &Step<'_>) {}
}

/// Wraps an observer so that the search stops once `flag` is raised, for instance by a UI thread
/// reacting to a key press.
#[derive(Debug)]
pub struct Cancellable<'a, O> {
    pub inner: O,
    flag: &'a AtomicBool,
}

impl<'a, O: StepObserver> Cancellable<'a, O> {
    pub fn new(inner: O, flag: &'a AtomicBool) -> Cancellable<'a, O> {
        Cancellable { inner, flag }
    }
}

impl<O: StepObserver> StepObserver for Cancellable<'_, O> {
    fn on_step(&mut self, step: &Step<'_>) {
        self.inner.on_step(step);
    }
    fn cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed) || self.inner.cancelled()
    }
}
