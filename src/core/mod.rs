/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal).
pub mod abort_signal;
/// [`Bounds`] type describing the feasible box of an optimization.
pub mod bounds;
/// [`Point`] type pairing a position with its fitness.
pub mod point;
/// [`SwarmSummary`] type for the result of an optimization run.
pub mod summary;
/// Random sampling helpers.
pub mod utils;

pub use abort_signal::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use bounds::{Bounds, InvalidBoundsError};
pub use point::Point;
pub use summary::SwarmSummary;
pub use utils::SampleFloat;
