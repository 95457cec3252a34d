//! Five independent counters, each backed by a different state-propagation
//! strategy: a view-local cell, a reducer cell, a global action store, an
//! atom and an external store with bound mutators.

pub mod args;
pub mod board;
pub mod cells;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod store;
pub mod subscription;
pub mod ui;
pub mod view;
