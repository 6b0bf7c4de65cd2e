//! Change notifications published by a [`Rover`](crate::Rover).
//!
//! Each mutation of the rover's direction or position is announced exactly once,
//! synchronously, to the subscribers of the matching channel in registration order.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Payload of the "direction changed" channel. Both values are in `[0, 360)`
/// unless the rover was built with an out-of-range starting direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionChanged {
    pub old: i32,
    pub new: i32,
}

/// Payload of the "position changed" channel.
///
/// `old` is a snapshot taken before the position was replaced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionChanged {
    pub old: Position,
    pub new: Position,
}

/// Handle returned by a subscription, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T) + Send>;

/// An ordered list of listeners for one event kind.
pub(crate) struct Subscribers<T> {
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` under `id`. Listeners are notified in the order they were added.
    pub(crate) fn add(&mut self, id: SubscriptionId, listener: Listener<T>) {
        self.listeners.push((id, listener));
    }

    /// Removes the listener registered under `id`. Returns false if there was none.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub(crate) fn publish(&mut self, event: &T) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Hands out unique subscription ids for one rover.
#[derive(Debug, Default)]
pub(crate) struct SubscriptionIds {
    next: u64,
}

impl SubscriptionIds {
    pub(crate) fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        id
    }
}
