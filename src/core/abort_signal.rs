use crate::traits::AbortSignal;
use parking_lot::Once;
use std::sync::atomic::{AtomicBool, Ordering};

static INIT: Once = Once::new();
static CTRL_C_PRESSED: AtomicBool = AtomicBool::new(false);

/// A signal that is triggered when the user presses `Ctrl-C`.
///
/// <div class="warning">This signal takes over the `Ctrl-C` handler for the whole process and
/// can interfere with other libraries that register their own handler.</div>
#[derive(Default)]
pub struct CtrlCAbortSignal;
impl CtrlCAbortSignal {
    /// Creates a new [`CtrlCAbortSignal`] and registers the process-wide `Ctrl-C` handler.
    pub fn new() -> Self {
        let signal = Self {};
        signal.init_handler();
        signal
    }

    fn init_handler(&self) {
        INIT.call_once(|| {
            #[allow(clippy::expect_used)]
            ctrlc::set_handler(move || {
                println!("Ctrl-C pressed");
                CTRL_C_PRESSED.store(true, Ordering::SeqCst);
            })
            .expect("Error setting Ctrl-C handler");
        });
    }
}

impl AbortSignal for CtrlCAbortSignal {
    fn is_aborted(&self) -> bool {
        CTRL_C_PRESSED.load(Ordering::SeqCst)
    }
    fn abort(&self) {
        CTRL_C_PRESSED.store(true, Ordering::SeqCst)
    }
    fn reset(&self) {
        CTRL_C_PRESSED.store(false, Ordering::SeqCst);
    }
}

/// A signal that is triggered by setting an atomic boolean, e.g. from another thread.
#[derive(Default)]
pub struct AtomicAbortSignal {
    abort: AtomicBool,
}

impl AtomicAbortSignal {
    /// Creates a new [`AtomicAbortSignal`] in the non-aborted state.
    pub const fn new() -> Self {
        Self {
            abort: AtomicBool::new(false),
        }
    }
}

impl AbortSignal for AtomicAbortSignal {
    fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::SeqCst)
    }
    fn abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }
    fn reset(&self) {
        self.abort.store(false, Ordering::SeqCst);
    }
}

/// A signal that is never triggered. This is the default signal of a
/// [`SwarmOptimizer`](crate::swarm::SwarmOptimizer).
#[derive(Default, Clone, Copy)]
pub struct NopAbortSignal;

impl AbortSignal for NopAbortSignal {
    fn is_aborted(&self) -> bool {
        false
    }
    fn abort(&self) {}
    fn reset(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_abort_signal_round_trip() {
        let signal = AtomicAbortSignal::new();
        assert!(!signal.is_aborted());
        signal.abort();
        assert!(signal.is_aborted());
        signal.reset();
        assert!(!signal.is_aborted());
    }

    #[test]
    fn test_nop_abort_signal_never_aborts() {
        let signal = NopAbortSignal;
        signal.abort();
        assert!(!signal.is_aborted());
    }
}
