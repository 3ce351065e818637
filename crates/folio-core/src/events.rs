//! Explicit listener registration for scroll and resize notifications.
//!
//! An [`EventSource`] hands out a [`Subscription`] for every listener. The
//! listener stays registered until the subscription is detached (or dropped),
//! so teardown is deterministic instead of tied to an ambient lifecycle.
//!
//! Everything here is single-threaded; sources and listeners live on the UI
//! thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

impl<E> Registry<E> {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// A source of events of type `E`.
pub struct EventSource<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

impl<E: 'static> EventSource<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener. It is called on every [`emit`](Self::emit) until
    /// the returned subscription is detached.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        let listener: Listener<E> = Rc::new(RefCell::new(listener));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || remove_listener(&registry, id))),
        }
    }

    /// Call every registered listener with `event`, in subscription order.
    ///
    /// Listeners may subscribe or detach while the event is dispatched. A
    /// listener detached mid-dispatch is not called afterwards, and a listener
    /// that is already running (nested emit) is skipped.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(u64, Listener<E>)> = self.registry.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

fn remove_listener<E>(registry: &Weak<RefCell<Registry<E>>>, id: u64) {
    let Some(registry) = registry.upgrade() else {
        return;
    };
    let removed = {
        let mut registry = registry.borrow_mut();
        registry
            .listeners
            .iter()
            .position(|(lid, _)| *lid == id)
            .map(|index| registry.listeners.remove(index))
    };
    // The listener may own subscriptions of its own; drop it outside the borrow.
    drop(removed);
}

/// Handle to a registered listener.
///
/// Call [`detach`](Self::detach) to unregister. Dropping the handle detaches
/// as well.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unregister the listener. No-op if the source is already gone.
    pub fn detach(mut self) {
        self.run_detach();
    }

    /// Whether this handle still owns a registration.
    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
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
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let source = EventSource::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = Rc::clone(&seen);
            source.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };

        source.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);

        a.detach();
        b.detach();
    }

    #[test]
    fn test_detached_listener_is_not_called() {
        let source = EventSource::<()>::new();
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let calls = Rc::clone(&calls);
            source.subscribe(move |_| calls.set(calls.get() + 1))
        };
        source.emit(&());
        sub.detach();
        source.emit(&());

        assert_eq!(calls.get(), 1);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_drop_detaches() {
        let source = EventSource::<()>::new();
        {
            let _sub = source.subscribe(|_| {});
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_detach_after_source_dropped_is_noop() {
        let source = EventSource::<()>::new();
        let sub = source.subscribe(|_| {});
        drop(source);
        sub.detach();
    }

    #[test]
    fn test_listener_detached_during_emit_is_skipped() {
        let source = Rc::new(EventSource::<()>::new());
        let later_calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let killer = {
            let victim = Rc::clone(&victim);
            source.subscribe(move |_| {
                if let Some(sub) = victim.borrow_mut().take() {
                    sub.detach();
                }
            })
        };
        let sub = {
            let later_calls = Rc::clone(&later_calls);
            source.subscribe(move |_| later_calls.set(later_calls.get() + 1))
        };
        *victim.borrow_mut() = Some(sub);

        source.emit(&());
        assert_eq!(later_calls.get(), 0);
        assert_eq!(source.listener_count(), 1);
        killer.detach();
    }

    #[test]
    fn test_nested_emit_skips_running_listener() {
        let source = Rc::new(EventSource::<u32>::new());
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let source_ref = Rc::downgrade(&source);
            let calls = Rc::clone(&calls);
            source.subscribe(move |depth| {
                calls.set(calls.get() + 1);
                if *depth == 0 {
                    if let Some(source) = source_ref.upgrade() {
                        source.emit(&1);
                    }
                }
            })
        };

        source.emit(&0);
        assert_eq!(calls.get(), 1);
        sub.detach();
    }
}
