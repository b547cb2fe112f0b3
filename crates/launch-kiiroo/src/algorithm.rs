//! Algorithm contract
//!
//! An `Algorithm` turns a validated event series into timed device actions.
//! Concrete algorithms live with the output layer; this module only fixes
//! the shape of the boundary.
//!
//! Every implementation must be:
//! - deterministic: the same events under the same configuration always
//!   produce the same actions
//! - non-mutating: events are only borrowed
//! - explicit about ordering: `ordering()` states whether input must be
//!   sorted by time. Decoding never sorts, so this cannot be assumed.
//!
//! Values are always in [MIN_VALUE, MAX_VALUE]; implementations may rely on it.

use crate::Events;

/// Input ordering an algorithm requires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputOrdering {
    /// Events may arrive in any order
    Any,
    /// Events must be sorted by ascending time
    SortedByTime,
}

/// Converts Kiiroo events into timed actions
pub trait Algorithm {
    /// Timed action produced for the output layer
    type Action;

    /// Ordering precondition of [`Algorithm::actions`]
    fn ordering(&self) -> InputOrdering;

    /// Translate events into actions
    ///
    /// Callers going through [`Algorithm::run`] get the declared ordering
    /// guaranteed; direct callers are responsible for it.
    fn actions(&self, events: &Events) -> Vec<Self::Action>;

    /// Translate events, establishing the declared ordering first
    ///
    /// Unsorted input to a `SortedByTime` algorithm is sorted on a copy;
    /// the caller's events are never touched.
    fn run(&self, events: &Events) -> Vec<Self::Action> {
        match self.ordering() {
            InputOrdering::SortedByTime if !events.is_sorted() => {
                tracing::debug!("Sorting {} events before translation", events.len());
                let sorted = events.clone().sorted();
                self.actions(&sorted)
            }
            _ => self.actions(events),
        }
    }
}

impl<A: Algorithm + ?Sized> Algorithm for &A {
    type Action = A::Action;

    fn ordering(&self) -> InputOrdering {
        (**self).ordering()
    }

    fn actions(&self, events: &Events) -> Vec<Self::Action> {
        (**self).actions(events)
    }
}

impl<A: Algorithm + ?Sized> Algorithm for Box<A> {
    type Action = A::Action;

    fn ordering(&self) -> InputOrdering {
        (**self).ordering()
    }

    fn actions(&self, events: &Events) -> Vec<Self::Action> {
        (**self).actions(events)
    }
}
