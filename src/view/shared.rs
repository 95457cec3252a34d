//! Views over the shared cells. Each subscribes on construction and
//! unsubscribes when dropped.

use super::{Button, CounterView, RenderSlot, Strategy};
use crate::cells::{Atom, CounterActions, CounterState, CounterStore};
use crate::context::AppContext;
use crate::error::CellError;
use crate::store::{decrement, increment, select_counter, Store, StoreAction};
use crate::subscription::SubscriptionId;

/// Reads `state.counter.counter` through a selector; dispatches actions.
pub struct GlobalStoreView {
    store: Store<StoreAction>,
    slot: RenderSlot,
    subscription: SubscriptionId,
}

impl GlobalStoreView {
    pub fn mount(ctx: &AppContext) -> Self {
        let store = ctx.global.clone();
        let slot = RenderSlot::new(select_counter(&store.get_state()));
        let sink = slot.clone();
        let subscription = store.subscribe(select_counter, move |value: &i64| sink.show(*value));
        Self {
            store,
            slot,
            subscription,
        }
    }
}

impl CounterView for GlobalStoreView {
    fn strategy(&self) -> Strategy {
        Strategy::GlobalStore
    }

    fn value(&self) -> i64 {
        self.slot.value()
    }

    fn renders(&self) -> u64 {
        self.slot.renders()
    }

    fn press(&mut self, button: Button) -> Result<(), CellError> {
        let action = match button {
            Button::Plus => increment(),
            Button::Minus => decrement(),
        };
        self.store.dispatch(action);
        Ok(())
    }

    /// Unrecognized types pass through the store unchanged.
    fn dispatch_tag(&mut self, tag: &str) -> Result<(), CellError> {
        self.store.dispatch(StoreAction::from_type(tag));
        Ok(())
    }
}

impl Drop for GlobalStoreView {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

/// Reads and writes the count atom directly.
pub struct AtomView {
    atom: Atom<i64>,
    slot: RenderSlot,
    subscription: SubscriptionId,
}

impl AtomView {
    pub fn mount(ctx: &AppContext) -> Self {
        let atom = ctx.count_atom.clone();
        let slot = RenderSlot::new(atom.read());
        let sink = slot.clone();
        let subscription = atom.subscribe(move |value: &i64| sink.show(*value));
        Self {
            atom,
            slot,
            subscription,
        }
    }
}

impl CounterView for AtomView {
    fn strategy(&self) -> Strategy {
        Strategy::Atom
    }

    fn value(&self) -> i64 {
        self.slot.value()
    }

    fn renders(&self) -> u64 {
        self.slot.renders()
    }

    fn press(&mut self, button: Button) -> Result<(), CellError> {
        let current = self.atom.read();
        let next = match button {
            Button::Plus => current.saturating_add(1),
            Button::Minus => current.saturating_sub(1),
        };
        self.atom.write(next);
        Ok(())
    }
}

impl Drop for AtomView {
    fn drop(&mut self) {
        self.atom.unsubscribe(self.subscription);
    }
}

/// Selects `count` from the counter store and calls its bound mutators.
pub struct ExternalStoreView {
    store: CounterStore,
    actions: CounterActions,
    slot: RenderSlot,
    subscription: SubscriptionId,
}

impl ExternalStoreView {
    pub fn mount(ctx: &AppContext) -> Self {
        let store = ctx.counter_store.clone();
        let actions = store.actions();
        let slot = RenderSlot::new(store.count());
        let sink = slot.clone();
        let subscription = store
            .state()
            .subscribe(|state: &CounterState| state.count, move |value: &i64| sink.show(*value));
        Self {
            store,
            actions,
            slot,
            subscription,
        }
    }
}

impl CounterView for ExternalStoreView {
    fn strategy(&self) -> Strategy {
        Strategy::ExternalStore
    }

    fn value(&self) -> i64 {
        self.slot.value()
    }

    fn renders(&self) -> u64 {
        self.slot.renders()
    }

    fn press(&mut self, button: Button) -> Result<(), CellError> {
        match button {
            Button::Plus => self.actions.increment(),
            Button::Minus => self.actions.decrement(),
        }
        Ok(())
    }
}

impl Drop for ExternalStoreView {
    fn drop(&mut self) {
        self.store.state().unsubscribe(self.subscription);
    }
}
