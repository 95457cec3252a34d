//! Root reducer composed from named slice reducers.

use crate::error::StoreError;
use crate::mvi::{Intent, Reducer};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

type SliceValue = Arc<dyn Any + Send + Sync>;

/// Snapshot of the combined state, keyed by slice name.
///
/// Cloning is cheap: slices are shared until a reducer replaces them.
#[derive(Clone, Default)]
pub struct RootState {
    slices: BTreeMap<&'static str, SliceValue>,
}

impl RootState {
    /// Typed read access to one slice.
    pub fn slice<T: Any>(&self, name: &str) -> Option<&T> {
        self.slices.get(name).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// True when both snapshots hold the same allocation for `name`.
    pub fn same_slice(&self, other: &RootState, name: &str) -> bool {
        match (self.slices.get(name), other.slices.get(name)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for RootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootState")
            .field("slices", &self.slices.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// One registered slice with its concrete state type erased.
trait ErasedSlice<A>: Send + Sync {
    fn name(&self) -> &'static str;
    fn initial(&self) -> SliceValue;
    /// `None` means the slice state is unchanged.
    fn reduce(&self, current: &SliceValue, action: &A) -> Option<SliceValue>;
}

struct TypedSlice<R: Reducer> {
    name: &'static str,
    initial: R::State,
    _reducer: PhantomData<fn() -> R>,
}

impl<A, R> ErasedSlice<A> for TypedSlice<R>
where
    A: Intent,
    R: Reducer<Intent = A>,
    R::State: Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn initial(&self) -> SliceValue {
        Arc::new(self.initial.clone())
    }

    fn reduce(&self, current: &SliceValue, action: &A) -> Option<SliceValue> {
        let state = current.downcast_ref::<R::State>()?;
        let next = R::reduce(state.clone(), action);
        if &next == state {
            None
        } else {
            Some(Arc::new(next))
        }
    }
}

/// Root transition function built from named slice reducers.
///
/// Each slice sees only its own sub-state; the keys of the produced
/// [`RootState`] are exactly the registered names.
pub struct CombinedReducer<A> {
    slices: Vec<Box<dyn ErasedSlice<A>>>,
}

impl<A: Intent> Default for CombinedReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Intent> CombinedReducer<A> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register reducer `R` under `name`, starting from `R::State::default()`.
    pub fn with_slice<R>(self, name: &'static str) -> Result<Self, StoreError>
    where
        R: Reducer<Intent = A> + 'static,
        R::State: Sync,
    {
        self.with_slice_state::<R>(name, R::State::default())
    }

    /// Register reducer `R` under `name` with an explicit initial state.
    pub fn with_slice_state<R>(
        mut self,
        name: &'static str,
        initial: R::State,
    ) -> Result<Self, StoreError>
    where
        R: Reducer<Intent = A> + 'static,
        R::State: Sync,
    {
        if self.slices.iter().any(|slice| slice.name() == name) {
            return Err(StoreError::DuplicateSlice { name });
        }
        self.slices.push(Box::new(TypedSlice::<R> {
            name,
            initial,
            _reducer: PhantomData,
        }));
        Ok(self)
    }

    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|slice| slice.name())
    }

    pub fn initial_state(&self) -> RootState {
        RootState {
            slices: self
                .slices
                .iter()
                .map(|slice| (slice.name(), slice.initial()))
                .collect(),
        }
    }

    /// Run every slice reducer. Returns `None` when no slice changed.
    pub fn reduce(&self, state: &RootState, action: &A) -> Option<RootState> {
        let mut next = state.clone();
        let mut changed = false;
        for slice in &self.slices {
            let Some(current) = state.slices.get(slice.name()) else {
                continue;
            };
            if let Some(value) = slice.reduce(current, action) {
                next.slices.insert(slice.name(), value);
                changed = true;
            }
        }
        changed.then_some(next)
    }
}
