use std::convert::Infallible;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fastrand::Rng;
use pswarm::core::{Bounds, CtrlCAbortSignal};
use pswarm::prelude::*;
use pswarm::PI;

/// Fit a four-parameter chirp model to a noisy signal by minimizing the L1 error.
///
/// The signal is `4t cos(4πt²) exp(-3t²)` over `t ∈ [-2, 2]` with small uniform noise, and the
/// model is `a₀ t sin(a₁ π t² + a₂) exp(-a₃ t²)` with all four parameters bounded to `[0, 10]`.
struct ChirpFit {
    t: Vec<Float>,
    signal: Vec<Float>,
}

impl ChirpFit {
    fn new(n: usize, rng: &mut Rng) -> Self {
        let t: Vec<Float> = (0..n)
            .map(|i| -2.0 + 4.0 * (i as Float) / ((n - 1) as Float))
            .collect();
        let signal = t
            .iter()
            .map(|&t| {
                4.0 * t * Float::cos(4.0 * PI * t.powi(2)) * Float::exp(-3.0 * t.powi(2))
                    + (rng.f64() as Float - 0.5) * 0.05
            })
            .collect();
        Self { t, signal }
    }
}

impl CostFunction for ChirpFit {
    fn evaluate(&self, a: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(self
            .t
            .iter()
            .zip(&self.signal)
            .map(|(&t, &s)| {
                let model =
                    a[0] * t * Float::sin(a[1] * PI * t.powi(2) + a[2]) * Float::exp(-a[3] * t.powi(2));
                Float::abs(s - model)
            })
            .sum())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = Rng::with_seed(0);
    let problem = ChirpFit::new(1000, &mut rng);

    let bounds = Bounds::new(vec![0.0; 4], vec![10.0; 4])?;

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();

    let mut opt = SwarmOptimizer::new(bounds, rng)
        .with_observer(tracker.clone())
        .with_abort_signal(CtrlCAbortSignal::new());

    let summary = opt.optimize(&problem, &mut ())?;

    println!("{}", summary);

    // Export the results to a Python .pkl file to visualize via matplotlib
    let mut writer = BufWriter::new(File::create(Path::new("data.pkl"))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}
