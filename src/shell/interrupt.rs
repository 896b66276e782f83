//! Ctrl-C handling.
//!
//! On Unix a SIGINT handler records the interrupt in a process-wide flag
//! instead of terminating, so the checklist can stop between checks and
//! print a cancellation message. A child process in the foreground receives
//! the same SIGINT and exits on its own.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn on_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler. No-op on other platforms.
#[cfg(unix)]
pub fn install_handler() {
    // SAFETY: the handler only performs an atomic store, which is
    // async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, on_sigint as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
pub fn install_handler() {}

/// Whether an interrupt has been received.
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
