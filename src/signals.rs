//! SIGINT bookkeeping for the loop.
//!
//! Ctrl-C while blocked on input ends `repl` with status 0. Ctrl-C while a
//! command runs reaches the command (same process group) and is only
//! recorded here, so the loop can report it and carry on.

use signal_hook::consts::SIGINT;
use signal_hook::flag;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct Interrupts {
    reading: Arc<AtomicBool>,
    interrupted: Arc<AtomicBool>,
}

impl Interrupts {
    /// Register the SIGINT handlers for this process.
    pub fn install() -> io::Result<Self> {
        let interrupts = Self::default();
        flag::register_conditional_shutdown(SIGINT, 0, Arc::clone(&interrupts.reading))?;
        flag::register(SIGINT, Arc::clone(&interrupts.interrupted))?;
        Ok(interrupts)
    }

    /// Flags that are never touched by a signal handler.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Mark the process as blocked on input until the guard is dropped.
    pub fn reading(&self) -> ReadingGuard<'_> {
        self.reading.store(true, Ordering::SeqCst);
        ReadingGuard(&self.reading)
    }

    pub fn clear(&self) {
        self.interrupted.store(false, Ordering::SeqCst);
    }

    /// Record an interrupt without a signal.
    pub fn raise(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt arrived since the last call; resets the flag.
    pub fn take(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}

pub struct ReadingGuard<'a>(&'a AtomicBool);

impl Drop for ReadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
