use crate::swarm::Swarm;
use parking_lot::RwLock;
use std::{ops::ControlFlow, sync::Arc};

/// A trait which holds a [`callback`](`SwarmObserver::callback`) function that can be used to
/// watch the state of the swarm during an optimization.
///
/// Observers run once after every iteration, before the convergence check. Returning
/// [`ControlFlow::Break`] ends the run; the optimizer still produces a
/// [`SwarmSummary`](crate::core::SwarmSummary).
pub trait SwarmObserver<U> {
    /// A function that is called after every [`SwarmOptimizer`](crate::swarm::SwarmOptimizer)
    /// iteration.
    fn callback(&mut self, step: usize, swarm: &Swarm, user_data: &mut U) -> ControlFlow<()>;
}

/// A debugging observer which prints the step number and global best at every iteration.
///
/// # Usage:
///
/// ```rust
/// use fastrand::Rng;
/// use pswarm::prelude::*;
/// use pswarm::test_functions::Sphere;
/// use pswarm::traits::observer::DebugObserver;
///
/// let bounds = Bounds::new(vec![-5.0, -5.0], vec![5.0, 5.0]).unwrap();
/// let mut opt = SwarmOptimizer::new(bounds, Rng::with_seed(0))
///     .with_swarm_size(20)
///     .with_max_iterations(5)
///     .with_convergence_threshold(0.0)
///     .with_observer(DebugObserver.build());
/// let summary = opt.optimize(&Sphere { n: 2 }, &mut ()).unwrap();
/// // ^ This will print the global best for each step
/// assert_eq!(summary.n_iterations, 5);
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the observer by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }
}
impl<U> SwarmObserver<U> for DebugObserver {
    fn callback(&mut self, step: usize, swarm: &Swarm, _user_data: &mut U) -> ControlFlow<()> {
        println!("step: {}, best: {}", step, swarm.best);
        ControlFlow::Continue(())
    }
}
