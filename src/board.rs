//! The composing view: all five strategies side by side.

use crate::context::AppContext;
use crate::error::CellError;
use crate::view::{
    AtomView, Button, CounterView, ExternalStoreView, GlobalStoreView, LocalView, ReducerView,
    Strategy,
};

/// One reading of a section, as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub strategy: Strategy,
    pub value: i64,
    pub renders: u64,
}

/// Owns the five counter views. Holds no state of its own.
pub struct Board {
    views: Vec<Box<dyn CounterView>>,
}

impl Board {
    /// Mount the five views in [`Strategy::ALL`] order.
    ///
    /// `initial` seeds the two view-owned cells; the shared cells take their
    /// initial value from `ctx`.
    pub fn mount(ctx: &AppContext, initial: i64, reducer_step: i64) -> Self {
        let views: Vec<Box<dyn CounterView>> = vec![
            Box::new(LocalView::new(initial)),
            Box::new(ReducerView::new(initial, reducer_step)),
            Box::new(GlobalStoreView::mount(ctx)),
            Box::new(AtomView::mount(ctx)),
            Box::new(ExternalStoreView::mount(ctx)),
        ];
        debug_assert!(views
            .iter()
            .zip(Strategy::ALL)
            .all(|(view, strategy)| view.strategy() == strategy));
        Self { views }
    }

    /// Activate one control of one section.
    pub fn press(&mut self, strategy: Strategy, button: Button) -> Result<(), CellError> {
        let view = &mut self.views[strategy.index()];
        tracing::debug!(strategy = strategy.key(), button = button.label(), "press");
        view.press(button)
    }

    /// Send a raw action tag to one section.
    pub fn dispatch_tag(&mut self, strategy: Strategy, tag: &str) -> Result<(), CellError> {
        let view = &mut self.views[strategy.index()];
        tracing::debug!(strategy = strategy.key(), tag, "dispatch tag");
        view.dispatch_tag(tag)
    }

    pub fn value(&self, strategy: Strategy) -> i64 {
        self.views[strategy.index()].value()
    }

    pub fn reading(&self, strategy: Strategy) -> Reading {
        let view = &self.views[strategy.index()];
        Reading {
            strategy,
            value: view.value(),
            renders: view.renders(),
        }
    }

    pub fn readings(&self) -> [Reading; 5] {
        Strategy::ALL.map(|strategy| self.reading(strategy))
    }

    /// Sum of all render counts; changes whenever any section must redraw.
    pub fn render_generation(&self) -> u64 {
        self.views.iter().map(|view| view.renders()).sum()
    }
}
