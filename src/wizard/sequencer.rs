//! Generic step sequencer shared by every wizard.
//!
//! Steps progress linearly through `WizardStep::ORDER`. Moving forward is
//! gated by a precondition the owning flow evaluates; moving back from the
//! first step closes the flow.

use std::fmt::{Debug, Display};

use serde::Serialize;

/// An ordered set of wizard steps.
pub trait WizardStep: Copy + Eq + Debug + Display + Send + Sync + 'static {
    /// All steps, first to last.
    const ORDER: &'static [Self];
}

/// Outcome of an `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "step", rename_all = "snake_case")]
pub enum Advance<S> {
    /// Moved forward to this step.
    Moved(S),
    /// The current step's precondition does not hold.
    Blocked,
    /// A fetch is in flight; try again once it settles.
    Busy,
    /// Already on the last step.
    AtEnd,
    /// The request this advance started was replaced by a newer one or
    /// cancelled by `retreat()`.
    Superseded,
    /// The flow has been closed.
    Closed,
}

impl<S> Advance<S> {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Outcome of a `retreat()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "step", rename_all = "snake_case")]
pub enum Retreat<S> {
    Moved(S),
    /// Retreated past the first step, or the flow was already closed.
    Closed,
}

/// Position within a `WizardStep` sequence.
#[derive(Debug, Clone)]
pub struct StepSequencer<S: WizardStep> {
    index: usize,
    closed: bool,
    _steps: std::marker::PhantomData<S>,
}

impl<S: WizardStep> Default for StepSequencer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> StepSequencer<S> {
    pub fn new() -> Self {
        Self {
            index: 0,
            closed: false,
            _steps: std::marker::PhantomData,
        }
    }

    pub fn current(&self) -> S {
        S::ORDER[self.index]
    }

    /// 1-based position, for progress bars.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        S::ORDER.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == S::ORDER.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Retreat is always available while open; on the first step it closes.
    pub fn can_retreat(&self) -> bool {
        !self.closed
    }

    /// Move forward if `precondition` holds.
    pub fn advance_if(&mut self, precondition: bool) -> Advance<S> {
        if self.closed {
            return Advance::Closed;
        }
        if self.is_last() {
            return Advance::AtEnd;
        }
        if !precondition {
            return Advance::Blocked;
        }
        self.index += 1;
        Advance::Moved(self.current())
    }

    /// Move back one step, closing the flow at the lower boundary.
    pub fn retreat(&mut self) -> Retreat<S> {
        if self.closed {
            return Retreat::Closed;
        }
        if self.is_first() {
            self.closed = true;
            return Retreat::Closed;
        }
        self.index -= 1;
        Retreat::Moved(self.current())
    }

    /// Jump back to `step` if it is behind the current position. Returns
    /// whether the position changed.
    pub fn rewind_to(&mut self, step: S) -> bool {
        if self.closed {
            return false;
        }
        match S::ORDER.iter().position(|s| *s == step) {
            Some(target) if target < self.index => {
                self.index = target;
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.index = 0;
    }
}
