//! Explicit publish/subscribe bookkeeping.
//!
//! A [`SubscriberList`] is owned by a state container and evaluated after
//! every mutation. Each record derives a value from the container state and
//! only calls its listener when that derived value changed.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Type-erased subscriber: "re-derive, compare, maybe notify".
type Probe<S> = Box<dyn FnMut(&S) -> bool + Send>;

struct SubscriberRecord<S> {
    id: SubscriptionId,
    probe: Probe<S>,
}

/// Ordered list of subscriber records over state `S`.
pub struct SubscriberList<S> {
    next_id: u64,
    records: Vec<SubscriberRecord<S>>,
}

impl<S> Default for SubscriberList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SubscriberList<S> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Register a selector whose output is compared with `PartialEq`.
    ///
    /// The first derived value is taken from `state`; the listener is not
    /// called until that value changes.
    pub fn subscribe<V, Sel, L>(&mut self, state: &S, selector: Sel, listener: L) -> SubscriptionId
    where
        S: 'static,
        V: PartialEq + Send + 'static,
        Sel: Fn(&S) -> V + Send + 'static,
        L: FnMut(&V) + Send + 'static,
    {
        self.subscribe_with(state, selector, |a: &V, b: &V| a == b, listener)
    }

    /// Register a selector with an explicit equality comparator.
    pub fn subscribe_with<V, Sel, Cmp, L>(
        &mut self,
        state: &S,
        selector: Sel,
        equals: Cmp,
        mut listener: L,
    ) -> SubscriptionId
    where
        S: 'static,
        V: Send + 'static,
        Sel: Fn(&S) -> V + Send + 'static,
        Cmp: Fn(&V, &V) -> bool + Send + 'static,
        L: FnMut(&V) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut last = selector(state);
        let probe = move |state: &S| {
            let next = selector(state);
            if equals(&last, &next) {
                return false;
            }
            listener(&next);
            last = next;
            true
        };

        self.records.push(SubscriberRecord {
            id,
            probe: Box::new(probe),
        });
        id
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Evaluate every record against `state` in registration order.
    ///
    /// Returns the number of listeners that fired.
    pub fn notify(&mut self, state: &S) -> usize {
        self.records
            .iter_mut()
            .map(|record| (record.probe)(state))
            .filter(|fired| *fired)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Comparator that treats every pair of values as different.
///
/// Used by readers that must be notified on every write.
pub fn never_equal<V>(_: &V, _: &V) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct Pair {
        left: i64,
        right: i64,
    }

    fn recorder() -> (Arc<Mutex<Vec<i64>>>, impl FnMut(&i64) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &i64| sink.lock().push(*value))
    }

    #[test]
    fn subscribe_does_not_fire_immediately() {
        let mut list = SubscriberList::new();
        let (seen, listener) = recorder();
        list.subscribe(&Pair::default(), |p: &Pair| p.left, listener);
        assert!(seen.lock().is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn notify_fires_only_on_selected_change() {
        let mut list = SubscriberList::new();
        let (left_seen, left) = recorder();
        let (right_seen, right) = recorder();
        let mut state = Pair::default();
        list.subscribe(&state, |p: &Pair| p.left, left);
        list.subscribe(&state, |p: &Pair| p.right, right);

        state.left = 3;
        assert_eq!(list.notify(&state), 1);
        state.left = 3;
        assert_eq!(list.notify(&state), 0);
        state.right = -1;
        assert_eq!(list.notify(&state), 1);

        assert_eq!(*left_seen.lock(), vec![3]);
        assert_eq!(*right_seen.lock(), vec![-1]);
    }

    #[test]
    fn custom_comparator_controls_notification() {
        let mut list = SubscriberList::new();
        let (seen, listener) = recorder();
        let state = Pair::default();
        list.subscribe_with(&state, |p: &Pair| p.left, never_equal, listener);

        assert_eq!(list.notify(&state), 1);
        assert_eq!(list.notify(&state), 1);
        assert_eq!(*seen.lock(), vec![0, 0]);
    }

    #[test]
    fn unsubscribe_removes_record() {
        let mut list = SubscriberList::new();
        let (seen, listener) = recorder();
        let mut state = Pair::default();
        let id = list.subscribe(&state, |p: &Pair| p.left, listener);

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        assert!(list.is_empty());

        state.left = 9;
        assert_eq!(list.notify(&state), 0);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut list: SubscriberList<Pair> = SubscriberList::new();
        let state = Pair::default();
        let a = list.subscribe(&state, |p: &Pair| p.left, |_: &i64| {});
        let b = list.subscribe(&state, |p: &Pair| p.left, |_: &i64| {});
        assert_ne!(a, b);
        assert!(a < b);
    }
}
