//! Counter views: the consumers of the five cells.
//!
//! A view shows one integer and exposes a `+` and a `-` control. Its render
//! count goes up exactly once per observed change of that integer, which is
//! what the terminal front end uses to decide whether to redraw.

mod owned;
mod shared;

pub use owned::{LocalView, ReducerView};
pub use shared::{AtomView, ExternalStoreView, GlobalStoreView};

use crate::error::CellError;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// The state-propagation strategy behind a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Local,
    Reducer,
    GlobalStore,
    Atom,
    ExternalStore,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Local,
        Strategy::Reducer,
        Strategy::GlobalStore,
        Strategy::Atom,
        Strategy::ExternalStore,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Strategy::Local => "Local Cell",
            Strategy::Reducer => "Reducer Cell",
            Strategy::GlobalStore => "Global Action Store",
            Strategy::Atom => "Atom Cell",
            Strategy::ExternalStore => "External Store",
        }
    }

    /// Short name used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Strategy::Local => "local",
            Strategy::Reducer => "reducer",
            Strategy::GlobalStore => "store",
            Strategy::Atom => "atom",
            Strategy::ExternalStore => "external",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn index(self) -> usize {
        match self {
            Strategy::Local => 0,
            Strategy::Reducer => 1,
            Strategy::GlobalStore => 2,
            Strategy::Atom => 3,
            Strategy::ExternalStore => 4,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One of the two activatable controls of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Plus,
    Minus,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Plus => "+",
            Button::Minus => "-",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+" => Some(Button::Plus),
            "-" => Some(Button::Minus),
            _ => None,
        }
    }
}

pub trait CounterView: Send {
    fn strategy(&self) -> Strategy;

    /// The value as last rendered.
    fn value(&self) -> i64;

    /// How many times the value shown by this view changed.
    fn renders(&self) -> u64;

    fn press(&mut self, button: Button) -> Result<(), CellError>;

    /// Feed a raw action tag. Views without an action vocabulary accept only
    /// the two control labels.
    fn dispatch_tag(&mut self, tag: &str) -> Result<(), CellError> {
        match Button::from_label(tag) {
            Some(button) => self.press(button),
            None => Err(CellError::UnknownAction {
                tag: tag.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rendered {
    value: i64,
    renders: u64,
}

/// Value last delivered to a subscribed view, written by its listener.
#[derive(Clone)]
pub(crate) struct RenderSlot {
    inner: Arc<Mutex<Rendered>>,
}

impl RenderSlot {
    pub(crate) fn new(value: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Rendered { value, renders: 0 })),
        }
    }

    /// Show `value`. Counts a render only if it differs from what is shown.
    pub(crate) fn show(&self, value: i64) {
        let mut rendered = self.inner.lock();
        if rendered.value != value {
            rendered.value = value;
            rendered.renders += 1;
        }
    }

    pub(crate) fn value(&self) -> i64 {
        self.inner.lock().value
    }

    pub(crate) fn renders(&self) -> u64 {
        self.inner.lock().renders
    }
}
