//! A single addressable unit of shared state.
//!
//! Any holder of the atom may read or write it directly. Every write
//! notifies every reader.

use super::external::ExternalStore;
use crate::mvi::UiState;
use crate::subscription::{never_equal, SubscriptionId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ATOM_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtomId(u64);

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atom#{}", self.0)
    }
}

/// Shared atom handle. Clones refer to the same atom.
pub struct Atom<T> {
    id: AtomId,
    cell: ExternalStore<T>,
}

impl<T> Clone for Atom<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            cell: self.cell.clone(),
        }
    }
}

impl<T> PartialEq for Atom<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> fmt::Debug for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atom").field("id", &self.id).finish()
    }
}

impl<T: UiState> Atom<T> {
    pub fn new(initial: T) -> Self {
        Self {
            id: AtomId(NEXT_ATOM_ID.fetch_add(1, Ordering::Relaxed)),
            cell: ExternalStore::new(initial),
        }
    }

    pub fn id(&self) -> AtomId {
        self.id
    }

    pub fn read(&self) -> T {
        self.cell.get_state()
    }

    /// Replace the value unconditionally. Returns how many readers ran.
    pub fn write(&self, value: T) -> usize {
        self.cell.force_set(move |_| value)
    }

    /// Write `f(current)`.
    pub fn update<F>(&self, f: F) -> usize
    where
        F: FnOnce(&T) -> T,
    {
        self.cell.force_set(f)
    }

    /// Register a reader; it is called with the new value after every write.
    pub fn subscribe<L>(&self, listener: L) -> SubscriptionId
    where
        L: FnMut(&T) + Send + 'static,
    {
        self.cell
            .subscribe_with(|value: &T| value.clone(), never_equal, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.cell.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn write_overrides_any_prior_value() {
        let atom = Atom::new(-3_i64);
        atom.write(42);
        assert_eq!(atom.read(), 42);
    }

    #[test]
    fn atoms_have_distinct_identity() {
        let a = Atom::new(0_i64);
        let b = Atom::new(0_i64);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone(), a);
        assert_ne!(a, b);
    }

    #[test]
    fn every_write_reaches_every_reader() {
        let atom = Atom::new(0_i64);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&seen);
        let second = Arc::clone(&seen);
        atom.subscribe(move |v: &i64| first.lock().push(("a", *v)));
        atom.subscribe(move |v: &i64| second.lock().push(("b", *v)));

        assert_eq!(atom.write(1), 2);
        assert_eq!(atom.write(1), 2);
        assert_eq!(seen.lock().len(), 4);
    }

    #[test]
    fn update_uses_current_value() {
        let atom = Atom::new(10_i64);
        atom.update(|v| v + 1);
        atom.update(|v| v * 2);
        assert_eq!(atom.read(), 22);
    }
}
