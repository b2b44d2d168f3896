use crate::{
    core::Point,
    traits::SwarmObserver,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::sync::Arc;

/// The swarm itself: particles, initialization policies, and best tracking.
#[allow(clippy::module_inception)]
pub mod swarm;
pub use swarm::{Particle, PositionInitializer, Swarm, VelocitySign};

/// The particle swarm minimizer.
pub mod optimizer;
pub use optimizer::SwarmOptimizer;

/// A [`SwarmObserver`] which records the full particle history of a run.
///
/// This can be useful for debugging or for visualizing swarm trajectories, at the cost of
/// cloning the entire swarm once per iteration.
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct TrackingSwarmObserver {
    /// The swarm's particles at the end of each iteration.
    pub history: Vec<Vec<Particle>>,
    /// The global best at the end of each iteration.
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`TrackingSwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<U> SwarmObserver<U> for TrackingSwarmObserver {
    fn callback(&mut self, _step: usize, swarm: &Swarm, _user_data: &mut U) -> ControlFlow<()> {
        self.history.push(swarm.particles.clone());
        self.best_history.push(swarm.best.clone());
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::swarm::SwarmOptimizer;
    use crate::test_functions::Rastrigin;
    use fastrand::Rng;

    #[test]
    fn test_tracker_records_every_iteration() {
        let tracker = TrackingSwarmObserver::build();
        let bounds = Bounds::new(vec![-5.12, -5.12], vec![5.12, 5.12]).unwrap();
        let summary = SwarmOptimizer::new(bounds, Rng::with_seed(0))
            .with_swarm_size(10)
            .with_max_iterations(4)
            .with_convergence_threshold(0.0)
            .with_observer(tracker.clone())
            .optimize(&Rastrigin { n: 2 }, &mut ())
            .unwrap();
        let tracker = tracker.read();
        assert_eq!(summary.n_iterations, 4);
        assert_eq!(tracker.history.len(), 4);
        assert_eq!(tracker.best_history.len(), 4);
        assert!(tracker.history.iter().all(|swarm| swarm.len() == 10));
        assert_eq!(tracker.best_history.last().unwrap().fx, summary.fx);
    }
}
