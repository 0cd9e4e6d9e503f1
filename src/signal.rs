//! Single-threaded change notification.
//!
//! A [`Signal`] keeps a list of listeners and calls them, in subscription
//! order, every time a value is emitted. Subscribing hands back a
//! [`Subscription`] guard; dropping the guard removes the listener, so a
//! component that is torn down can never be called back afterwards.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// A listener list for values of type `T`.
pub struct Signal<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a signal with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener. It stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            let listener: Listener<T> = Rc::new(RefCell::new(listener));
            registry.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    /// Calls every registered listener with `value`.
    ///
    /// Listeners may subscribe or unsubscribe while being notified. A listener
    /// removed during emission is not called for the remainder of it, and a
    /// listener that re-enters `emit` on the same signal is skipped for the
    /// nested emission.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<(u64, Listener<T>)> = self.registry.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.registry.borrow().is_subscribed(id) {
                continue;
            }
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(value);
            }
        }
    }

    /// Returns the number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard returned by [`Signal::subscribe`]. Unsubscribes on drop.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let signal: Signal<u32> = Signal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |v| seen.borrow_mut().push(("first", *v)))
        };
        let second = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |v| seen.borrow_mut().push(("second", *v)))
        };

        signal.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);

        drop(first);
        drop(second);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let signal: Signal<u32> = Signal::new();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = Rc::clone(&calls);
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };
        signal.emit(&1);
        assert_eq!(signal.listener_count(), 1);

        drop(subscription);
        signal.emit(&2);

        assert_eq!(calls.get(), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_cancel_unsubscribes() {
        let signal: Signal<()> = Signal::new();
        let subscription = signal.subscribe(|_| {});
        subscription.cancel();
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_signal_is_harmless() {
        let subscription = {
            let signal: Signal<u32> = Signal::new();
            signal.subscribe(|_| {})
        };
        drop(subscription);
    }

    #[test]
    fn test_listener_removed_during_emit_is_skipped() {
        let signal: Signal<u32> = Signal::new();
        let victim_calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim = Rc::clone(&victim);
            signal.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        *victim.borrow_mut() = Some({
            let victim_calls = Rc::clone(&victim_calls);
            signal.subscribe(move |_| victim_calls.set(victim_calls.get() + 1))
        });

        signal.emit(&1);
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(signal.listener_count(), 1);
    }
}
