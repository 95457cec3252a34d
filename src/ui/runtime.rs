use crate::config::Config;
use crate::context::AppContext;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

pub fn run(config: &Config, ctx: &AppContext, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(ctx, &config.counters);
    let events = EventHandler::new(shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(tick_ms = config.ui.tick_rate_ms, "ui: started");

    loop {
        if app.needs_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
            app.mark_drawn();
        }
        if app.should_quit() {
            break;
        }

        // Shared cells may change off this thread; re-check at least once per tick.
        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the event thread.
    shutdown.signal();
    drop(guard);
    tracing::info!("ui: stopped");
    Ok(())
}
