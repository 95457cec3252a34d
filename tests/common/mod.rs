//! Shared test utilities.

#![allow(dead_code)]

use countercraft::board::Board;
use countercraft::config::CountersConfig;
use countercraft::context::AppContext;
use countercraft::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn make_ctx() -> AppContext {
    AppContext::new(&CountersConfig::default()).expect("default context")
}

pub fn make_board() -> (AppContext, Board) {
    let ctx = make_ctx();
    let board = Board::mount(&ctx, 0, 1);
    (ctx, board)
}

pub fn make_app() -> App {
    let counters = CountersConfig::default();
    let ctx = AppContext::new(&counters).expect("default context");
    App::new(&ctx, &counters)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Listener that records every value it is called with.
pub fn recorder() -> (Arc<Mutex<Vec<i64>>>, impl FnMut(&i64) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value: &i64| sink.lock().push(*value))
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
