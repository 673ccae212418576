//! Return value of a state-mutating contract call.

use serde::{Deserialize, Serialize};

/// The result of a successful contract call together with the events it emitted.
///
/// Contracts never broadcast on a side channel: whatever they would have
/// emitted travels back to the host in `events`, in emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T, E> {
    pub value: T,
    pub events: Vec<E>,
}

impl<T, E> Outcome<T, E> {
    pub fn new(value: T, events: Vec<E>) -> Self {
        Self { value, events }
    }

    /// A call that emitted exactly one event.
    pub fn with_event(value: T, event: E) -> Self {
        Self {
            value,
            events: vec![event],
        }
    }

    /// Transform the value, keeping the events.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome {
            value: f(self.value),
            events: self.events,
        }
    }

    /// Transform the events, keeping the value.
    pub fn map_events<F>(self, f: impl FnMut(E) -> F) -> Outcome<T, F> {
        Outcome {
            value: self.value,
            events: self.events.into_iter().map(f).collect(),
        }
    }
}
