use crate::{
    core::{utils::SampleFloat, Bounds, NopAbortSignal, Point, SwarmSummary},
    swarm::{PositionInitializer, Swarm, VelocitySign},
    traits::{AbortSignal, CostFunction, SwarmObserver},
    Float,
};
use fastrand::Rng;
use parking_lot::RwLock;
use std::sync::Arc;

/// A particle swarm minimizer over a bounded box.
///
/// The swarm evolves by the canonical PSO velocity update,
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_P^{t+1}(p_i^t - x_i^t) + c_2 r_G^{t+1}(g^t - x_i^t)
/// ```
///
/// where $`r_P`$ and $`r_G`$ are uniform random scalars in $`[0, 1)`$ drawn once per particle
/// per iteration and shared across that particle's dimensions, $`\omega`$ is the inertia
/// weight, $`c_1`$ and $`c_2`$ are the cognitive and social weights, $`p_i^t`$ is the
/// particle's personal best, and $`g^t`$ is the swarm's global best. Updates are synchronous
/// (generational): the global best used for social attraction is frozen for a whole
/// iteration, and personal/global bests are only refreshed in a second pass after every
/// particle has moved. The asynchronous variant (immediate best adoption) is a different,
/// non-equivalent algorithm and is deliberately not offered.
///
/// A run terminates when the global best fitness falls below the convergence threshold, when
/// the iteration budget is exhausted, when an observer breaks, or when the abort signal
/// fires; all four produce a [`SwarmSummary`]. The only error path is a cost function
/// evaluation failure, which aborts the run with no partial result.
pub struct SwarmOptimizer<U = ()> {
    /// The swarm being evolved. Empty until [`SwarmOptimizer::initialize`] runs; readable at
    /// any point after to inspect particles and the global best between steps.
    pub swarm: Swarm,
    bounds: Bounds,
    rng: Rng,
    swarm_size: usize,
    max_iterations: usize,
    convergence_threshold: Float,
    omega: Float,
    c1: Float,
    c2: Float,
    position_initializer: PositionInitializer,
    velocity_sign: VelocitySign,
    observers: Vec<Arc<RwLock<dyn SwarmObserver<U>>>>,
    abort_signal: Box<dyn AbortSignal>,
    n_f_evals: usize,
}

impl<U> SwarmOptimizer<U> {
    /// Creates a new optimizer over the given (already validated) [`Bounds`] with the given
    /// random number generator. Seed the generator for reproducible runs.
    pub fn new(bounds: Bounds, rng: Rng) -> Self {
        Self {
            swarm: Swarm::default(),
            bounds,
            rng,
            swarm_size: 100,
            max_iterations: 500,
            convergence_threshold: 1.0,
            omega: 0.2,
            c1: 0.2,
            c2: 0.1,
            position_initializer: PositionInitializer::default(),
            velocity_sign: VelocitySign::default(),
            observers: Vec::default(),
            abort_signal: Box::new(NopAbortSignal),
            n_f_evals: 0,
        }
    }
    /// Sets the number of particles in the swarm (default = `100`).
    ///
    /// # Panics
    ///
    /// This method will panic if `value` is zero.
    pub fn with_swarm_size(mut self, value: usize) -> Self {
        assert!(value >= 1, "swarm must contain at least one particle");
        self.swarm_size = value;
        self
    }
    /// Sets the hard cap on the number of iterations (default = `500`).
    pub const fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }
    /// Sets the fitness below which the search stops early and is considered successful
    /// (default = `1.0`).
    pub const fn with_convergence_threshold(mut self, value: Float) -> Self {
        self.convergence_threshold = value;
        self
    }
    /// Sets the inertia weight $`\omega`$, the fraction of previous velocity retained each
    /// iteration (default = `0.2`).
    pub const fn with_omega(mut self, value: Float) -> Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move
    /// towards its personal best (default = `0.2`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards
    /// the swarm's best (default = `0.1`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the [`PositionInitializer`] (default = [`PositionInitializer::Random`]).
    pub fn with_position_initializer(mut self, value: PositionInitializer) -> Self {
        self.position_initializer = value;
        self
    }
    /// Sets the [`VelocitySign`] policy for initial velocities (default =
    /// [`VelocitySign::Shared`]).
    pub const fn with_velocity_sign(mut self, value: VelocitySign) -> Self {
        self.velocity_sign = value;
        self
    }
    /// Adds a single [`SwarmObserver`] to the optimizer.
    pub fn with_observer<O: SwarmObserver<U> + 'static>(
        mut self,
        observer: Arc<RwLock<O>>,
    ) -> Self {
        self.observers.push(observer);
        self
    }
    /// Sets the [`AbortSignal`] polled once per iteration (default =
    /// [`NopAbortSignal`]).
    pub fn with_abort_signal<A: AbortSignal + 'static>(mut self, abort_signal: A) -> Self {
        self.abort_signal = Box::new(abort_signal);
        self
    }
    /// The global best point found so far.
    pub const fn best(&self) -> &Point {
        &self.swarm.best
    }
    /// The bounds the swarm searches within.
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }
    /// Populates the swarm: positions from the [`PositionInitializer`], velocities from the
    /// [`VelocitySign`] policy, personal bests at the starting points, and the global best
    /// seeded from particle 0 and then replaced by any strictly better particle in index
    /// order.
    ///
    /// Called by [`SwarmOptimizer::optimize`]; public so the swarm can also be stepped
    /// manually with [`SwarmOptimizer::update`].
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn initialize<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        self.n_f_evals = 0;
        self.swarm.initialize(
            &mut self.rng,
            &self.bounds,
            self.swarm_size,
            &self.position_initializer,
            self.velocity_sign,
            func,
            user_data,
        )?;
        self.n_f_evals += self.swarm.particles.len();
        Ok(())
    }
    /// Advances the swarm by one full iteration: every particle gets a new velocity and
    /// position (clamped into the bounds) and is re-evaluated, then the best-tracking pass
    /// runs over the whole swarm.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        // the global best used for social attraction is frozen for the whole iteration
        let gbest = self.swarm.best.x.clone();
        for particle in &mut self.swarm.particles {
            let r_p = self.rng.float();
            let r_g = self.rng.float();
            particle.velocity = &particle.velocity * self.omega
                + (&particle.best.x - &particle.position.x) * (self.c1 * r_p)
                + (&gbest - &particle.position.x) * (self.c2 * r_g);
            particle.update_position(func, user_data, &self.bounds)?;
        }
        self.n_f_evals += self.swarm.particles.len();
        self.swarm.track_bests();
        Ok(())
    }
    /// Runs a full optimization: one [`SwarmOptimizer::initialize`], then
    /// [`SwarmOptimizer::update`] up to the iteration cap. After each iteration the observers
    /// run (a [`ControlFlow::Break`](std::ops::ControlFlow) stops the run), then the
    /// convergence threshold is checked, then the abort signal is polled.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn optimize<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<SwarmSummary, E> {
        self.abort_signal.reset();
        self.initialize(func, user_data)?;
        let mut n_iterations = 0;
        let mut converged = false;
        let mut message = "MAX ITERATIONS";
        while n_iterations < self.max_iterations {
            self.update(func, user_data)?;
            n_iterations += 1;
            let mut observer_break = false;
            for observer in &self.observers {
                observer_break |= observer
                    .write()
                    .callback(n_iterations, &self.swarm, user_data)
                    .is_break();
            }
            if observer_break {
                message = "STOPPED BY OBSERVER";
                break;
            }
            if self.swarm.best.fx < self.convergence_threshold {
                converged = true;
                message = "CONVERGED";
                break;
            }
            if self.abort_signal.is_aborted() {
                message = "ABORTED";
                break;
            }
        }
        Ok(SwarmSummary {
            message: message.to_string(),
            bounds: self.bounds.clone(),
            x: self.swarm.best.x.clone(),
            fx: self.swarm.best.fx,
            n_particles: self.swarm.particles.len(),
            n_iterations,
            n_f_evals: self.n_f_evals,
            converged,
        })
    }
}
