//! The process-wide state containers, built once and passed to views.

use crate::cells::{Atom, CounterStore};
use crate::config::CountersConfig;
use crate::error::StoreError;
use crate::store::{Store, StoreAction};

/// Shared cells of the application.
///
/// Constructed once at startup; every view that needs shared state receives
/// a reference to it. Clones share the same underlying state.
#[derive(Clone)]
pub struct AppContext {
    pub global: Store<StoreAction>,
    pub count_atom: Atom<i64>,
    pub counter_store: CounterStore,
}

impl AppContext {
    pub fn new(config: &CountersConfig) -> Result<Self, StoreError> {
        let initial = config.initial_value;
        Ok(Self {
            global: Store::counter(initial)?,
            count_atom: Atom::new(initial),
            counter_store: CounterStore::new(initial),
        })
    }
}
