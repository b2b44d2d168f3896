use crate::{core::Bounds, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The result of a [`SwarmOptimizer::optimize`](crate::swarm::SwarmOptimizer::optimize) run.
///
/// Every terminal state of a run (converged, iteration budget exhausted, stopped by an
/// observer or an abort signal) yields the same summary shape; [`SwarmSummary::converged`] and
/// [`SwarmSummary::message`] tell the outcomes apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmSummary {
    /// A message describing the terminal state of the run.
    pub message: String,
    /// The bounds the swarm searched within.
    pub bounds: Bounds,
    /// The best position found by any particle across all iterations.
    pub x: DVector<Float>,
    /// The fitness at [`SwarmSummary::x`].
    pub fx: Float,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of [`update`](crate::swarm::SwarmOptimizer::update) calls performed.
    pub n_iterations: usize,
    /// The number of cost function evaluations performed.
    pub n_f_evals: usize,
    /// Whether the global best fitness fell below the convergence threshold.
    pub converged: bool,
}

impl SwarmSummary {
    /// Converts the summary into the best position-fitness pair.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        (self.x, self.fx)
    }
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MSG:       {}", self.message)?;
        for (i, x_i) in self.x.iter().enumerate() {
            if i == 0 {
                writeln!(f, "X:         {:+.5}", x_i)?;
            } else {
                writeln!(f, "           {:+.5}", x_i)?;
            }
        }
        writeln!(f, "F(X):      {:+.5E}", self.fx)?;
        writeln!(f, "BOUNDS:    {}", self.bounds)?;
        writeln!(f, "N_PART:    {}", self.n_particles)?;
        writeln!(f, "N_ITER:    {}", self.n_iterations)?;
        writeln!(f, "N_F_EVALS: {}", self.n_f_evals)?;
        write!(f, "CONVERGED: {}", self.converged)
    }
}
