/// A trait for abort signals.
///
/// Abort signals are polled by [`SwarmOptimizer::optimize`](crate::swarm::SwarmOptimizer::optimize)
/// once per iteration to check if the user has requested to end the run early. The core
/// termination policy is still the iteration budget and the convergence threshold; an abort is
/// an additional terminal state, never an error.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the run.
    fn is_aborted(&self) -> bool;
    /// Abort the run. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}

impl<T: AbortSignal + ?Sized> AbortSignal for std::sync::Arc<T> {
    fn is_aborted(&self) -> bool {
        self.as_ref().is_aborted()
    }
    fn abort(&self) {
        self.as_ref().abort()
    }
    fn reset(&self) {
        self.as_ref().reset()
    }
}
