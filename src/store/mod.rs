//! Process-wide store driven by action dispatch.
//!
//! The store owns a [`RootState`] produced by a [`CombinedReducer`] and a
//! list of selector subscriptions. A dispatch reduces, swaps the snapshot
//! and notifies subscribers under one lock, so dispatches are applied
//! atomically in submission order.

mod combine;
mod counter;

pub use combine::{CombinedReducer, RootState};
pub use counter::{
    decrement, increment, select_counter, CounterReducer, CounterSliceState, StoreAction,
    COUNTER_SLICE,
};

use crate::error::StoreError;
use crate::mvi::Intent;
use crate::subscription::{SubscriberList, SubscriptionId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Result of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// At least one slice produced a new state.
    Changed { notified: usize },
    /// No slice handled the action; state and subscribers untouched.
    Unchanged,
}

struct StoreInner<A> {
    reducer: CombinedReducer<A>,
    state: RootState,
    subscribers: SubscriberList<RootState>,
    dispatched: u64,
}

/// Shared handle to the global store. Clones refer to the same store.
pub struct Store<A> {
    inner: Arc<Mutex<StoreInner<A>>>,
}

impl<A> Clone for Store<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Intent + std::fmt::Debug> Store<A> {
    /// Build a store from a combined reducer.
    ///
    /// # Errors
    /// Returns [`StoreError::NoSlices`] when the reducer has no slice.
    pub fn configure(reducer: CombinedReducer<A>) -> Result<Self, StoreError> {
        if reducer.slice_names().next().is_none() {
            return Err(StoreError::NoSlices);
        }
        let state = reducer.initial_state();
        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner {
                reducer,
                state,
                subscribers: SubscriberList::new(),
                dispatched: 0,
            })),
        })
    }

    pub fn get_state(&self) -> RootState {
        self.inner.lock().state.clone()
    }

    pub fn dispatch(&self, action: A) -> DispatchOutcome {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.dispatched += 1;

        let Some(next) = inner.reducer.reduce(&inner.state, &action) else {
            tracing::debug!(?action, seq = inner.dispatched, "store: action left state unchanged");
            return DispatchOutcome::Unchanged;
        };

        inner.state = next;
        let notified = inner.subscribers.notify(&inner.state);
        tracing::debug!(?action, seq = inner.dispatched, notified, "store: dispatched");
        DispatchOutcome::Changed { notified }
    }

    /// Subscribe a view to a derived value of the root state.
    ///
    /// The listener runs only when the selector output changes. Listeners
    /// run while the store is locked and must not call back into it.
    pub fn subscribe<V, Sel, L>(&self, selector: Sel, listener: L) -> SubscriptionId
    where
        V: PartialEq + Send + 'static,
        Sel: Fn(&RootState) -> V + Send + 'static,
        L: FnMut(&V) + Send + 'static,
    {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.subscribers.subscribe(&inner.state, selector, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Number of actions dispatched so far, handled or not.
    pub fn dispatched(&self) -> u64 {
        self.inner.lock().dispatched
    }
}

impl Store<StoreAction> {
    /// The application store: a single `counter` slice.
    pub fn counter(initial: i64) -> Result<Self, StoreError> {
        let reducer = CombinedReducer::new().with_slice_state::<CounterReducer>(
            COUNTER_SLICE,
            CounterSliceState { counter: initial },
        )?;
        Self::configure(reducer)
    }
}
