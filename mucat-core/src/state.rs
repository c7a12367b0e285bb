//! Reactive state cells shared between view components
//!
//! A [`StateCell`] wraps a Dioxus [`Signal`], so components reading it with
//! [`StateCell::get`] re-render on change, and adds explicit subscribers that
//! are notified synchronously. Cells are owned by the scope that created them
//! and are `Copy`, like any signal.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::trace;

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

#[derive(Clone, Copy, Default)]
struct Delivery {
    running: bool,
    /// The value changed while subscribers were being notified
    restart: bool,
}

/// A readable, replaceable, subscribable value.
pub struct StateCell<T: 'static> {
    value: Signal<T>,
    subscribers: CopyValue<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: CopyValue<u64>,
    delivery: CopyValue<Delivery>,
}

impl<T: 'static> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for StateCell<T> {}

impl<T: 'static> PartialEq for StateCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialEq + Clone + 'static> StateCell<T> {
    /// Create a cell owned by the current scope.
    pub fn new(value: T) -> Self {
        Self {
            value: Signal::new(value),
            subscribers: CopyValue::new(Vec::new()),
            next_id: CopyValue::new(0),
            delivery: CopyValue::new(Delivery::default()),
        }
    }

    /// Current value. Inside a component or effect this subscribes it to changes.
    pub fn get(&self) -> T {
        self.value.cloned()
    }

    /// Current value, without subscribing the caller
    pub fn peek(&self) -> T {
        T::clone(&self.value.peek())
    }

    /// Run `f` on a snapshot of the current value. `f` may write to the cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.peek();
        f(&value)
    }

    /// Replace the value. Subscribers are notified once if it changed.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        if *self.value.peek() == value {
            return false;
        }
        let mut signal = self.value;
        signal.set(value);
        self.deliver();
        true
    }

    /// Mutate the value in place. Subscribers are notified once if it changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.peek();
        f(&mut next);
        self.set(next)
    }

    /// Register `callback` to run after every change. It is not called
    /// with the current value on subscription.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let mut next_id = self.next_id;
        let id = SubscriptionId(*next_id.peek());
        next_id.set(id.0 + 1);

        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let mut subscribers = self.subscribers;
        subscribers.write().push((id, callback));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers;
        let mut subscribers = subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.peek().len()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.peek().iter().any(|(sub_id, _)| *sub_id == id)
    }

    /// Notify subscribers of the current value.
    ///
    /// A change made by a subscriber ends the pass; a new pass then delivers
    /// the latest value, so every subscriber finishes on the current value.
    fn deliver(&self) {
        let mut delivery = self.delivery;
        if delivery.peek().running {
            delivery.write().restart = true;
            return;
        }
        delivery.write().running = true;

        loop {
            delivery.write().restart = false;
            let value = self.peek();
            // Snapshot so callbacks may subscribe or unsubscribe
            let subscribers: Vec<(SubscriptionId, Callback<T>)> =
                self.subscribers.peek().iter().cloned().collect();

            for (id, callback) in subscribers {
                if !self.is_subscribed(id) {
                    continue;
                }
                let mut callback = callback.borrow_mut();
                (*callback)(&value);
                drop(callback);

                if delivery.peek().restart {
                    break;
                }
            }

            if !delivery.peek().restart {
                break;
            }
            trace!("Value changed during notification, delivering the latest one");
        }

        delivery.write().running = false;
    }
}
