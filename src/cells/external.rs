//! Externally owned store: state and its mutators live in one object.
//!
//! Views call the mutators directly; there is no action protocol. Each
//! mutation is a functional update computed from the state current at call
//! time, applied and published under a single lock.

use crate::mvi::UiState;
use crate::subscription::{SubscriberList, SubscriptionId};
use parking_lot::Mutex;
use std::sync::Arc;

struct Inner<S> {
    state: S,
    subscribers: SubscriberList<S>,
}

/// Shared state container with selector subscriptions.
///
/// Clones share the same state.
pub struct ExternalStore<S> {
    inner: Arc<Mutex<Inner<S>>>,
}

impl<S> Clone for ExternalStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UiState> ExternalStore<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial,
                subscribers: SubscriberList::new(),
            })),
        }
    }

    pub fn get_state(&self) -> S {
        self.inner.lock().state.clone()
    }

    /// Replace the state with `update(current)` and notify subscribers.
    ///
    /// Returns the number of listeners that fired. Listeners run while the
    /// store is locked and must not call back into it.
    pub fn set<F>(&self, update: F) -> usize
    where
        F: FnOnce(&S) -> S,
    {
        let mut inner = self.inner.lock();
        let next = update(&inner.state);
        if next == inner.state {
            return 0;
        }
        inner.state = next;
        let Inner { state, subscribers } = &mut *inner;
        subscribers.notify(state)
    }

    /// Subscribe to a projection of the state.
    pub fn subscribe<V, Sel, L>(&self, selector: Sel, listener: L) -> SubscriptionId
    where
        V: PartialEq + Send + 'static,
        Sel: Fn(&S) -> V + Send + 'static,
        L: FnMut(&V) + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let Inner { state, subscribers } = &mut *inner;
        subscribers.subscribe(state, selector, listener)
    }

    /// Subscribe with an explicit comparator over the projected value.
    pub fn subscribe_with<V, Sel, Cmp, L>(
        &self,
        selector: Sel,
        equals: Cmp,
        listener: L,
    ) -> SubscriptionId
    where
        V: Send + 'static,
        Sel: Fn(&S) -> V + Send + 'static,
        Cmp: Fn(&V, &V) -> bool + Send + 'static,
        L: FnMut(&V) + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let Inner { state, subscribers } = &mut *inner;
        subscribers.subscribe_with(state, selector, equals, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Like [`set`](Self::set) but notifies even when the state is unchanged.
    pub(crate) fn force_set<F>(&self, update: F) -> usize
    where
        F: FnOnce(&S) -> S,
    {
        let mut inner = self.inner.lock();
        inner.state = update(&inner.state);
        let Inner { state, subscribers } = &mut *inner;
        subscribers.notify(state)
    }
}

/// State of the counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

/// Counter store whose mutators are bound to it.
#[derive(Clone)]
pub struct CounterStore {
    store: ExternalStore<CounterState>,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CounterStore {
    pub fn new(initial: i64) -> Self {
        Self {
            store: ExternalStore::new(CounterState { count: initial }),
        }
    }

    pub fn count(&self) -> i64 {
        self.store.get_state().count
    }

    pub fn increment(&self) {
        self.store.set(|state| CounterState {
            count: state.count.saturating_add(1),
        });
    }

    pub fn decrement(&self) {
        self.store.set(|state| CounterState {
            count: state.count.saturating_sub(1),
        });
    }

    /// The bound mutators, detached from the state projection.
    pub fn actions(&self) -> CounterActions {
        CounterActions {
            store: self.clone(),
        }
    }

    /// The underlying container, for selector subscriptions.
    pub fn state(&self) -> &ExternalStore<CounterState> {
        &self.store
    }
}

/// `increment` / `decrement` of a [`CounterStore`].
#[derive(Clone)]
pub struct CounterActions {
    store: CounterStore,
}

impl CounterActions {
    pub fn increment(&self) {
        self.store.increment();
    }

    pub fn decrement(&self) {
        self.store.decrement();
    }
}
