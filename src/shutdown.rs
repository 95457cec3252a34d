use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lightweight handle for checking shutdown state.
///
/// Set by SIGINT/SIGTERM or by the UI itself when the user quits.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT and SIGTERM into this handle.
    pub fn register_signals(&self) -> std::io::Result<()> {
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.shutdown))?;
        }
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown: graceful shutdown initiated");
        }
    }
}
