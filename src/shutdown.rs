use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Process-wide stop flag shared by the frame loop and the input thread.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT and SIGTERM into this handle.
    pub fn install_signal_handlers(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.shutdown))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.shutdown))?;
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }
}
