use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;

const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Input(KeyEvent),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                match event::poll(SHUTDOWN_POLL) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Input(key)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "events: failed to read terminal event");
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "events: poll failed");
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Wait up to `timeout` for the next event.
    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
