#![allow(clippy::suboptimal_flops)]
use std::convert::Infallible;

use crate::{traits::CostFunction, Float, PI};

/// The Rastrigin function, a non-convex function with multiple modes.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^{n} [x_i^2 - 10\cos(2\pi x_i)]
/// ```
/// where $`x_i \in [-5.12, 5.12]`$. The global minimum is $`f(\vec{0}) = 0`$.
pub struct Rastrigin {
    /// Number of dimensions
    pub n: usize,
}
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(10.0 * (self.n as Float)
            + (0..self.n)
                .map(|i| x[i].powi(2) - 10.0 * Float::cos(2.0 * PI * x[i]))
                .sum::<Float>())
    }
}

/// A generalized spherical function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} x_i^2
/// ```
/// The global minimum is at $`f(\vec{0}) = 0`$.
pub struct Sphere {
    /// Number of dimensions
    pub n: usize,
}
impl CostFunction for Sphere {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((0..self.n).map(|i| x[i].powi(2)).sum())
    }
}

/// A spherical function with its minimum translated away from the origin.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} (x_i - s)^2
/// ```
/// The global minimum is at $`f(\vec{s}) = 0`$.
pub struct ShiftedSphere {
    /// Number of dimensions
    pub n: usize,
    /// Location of the minimum along every axis
    pub shift: Float,
}
impl CostFunction for ShiftedSphere {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((0..self.n).map(|i| (x[i] - self.shift).powi(2)).sum())
    }
}

/// The Rosenbrock function, a non-convex function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n-1} \left[100(x_{i+1} - x_i^2)^2 + (1 - x_i)^2 \right]
/// ```
/// where $`n \geq 2`$. This function has a minimum at $`f(\vec{1}) = 0`$.
pub struct Rosenbrock {
    /// Number of dimensions (must be at least 2)
    pub n: usize,
}
impl CostFunction for Rosenbrock {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((0..(self.n - 1))
            .map(|i| 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (1.0 - x[i]).powi(2))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_minima() {
        assert_relative_eq!(Rastrigin { n: 3 }.evaluate(&[0.0; 3], &mut ()).unwrap(), 0.0);
        assert_relative_eq!(Sphere { n: 3 }.evaluate(&[0.0; 3], &mut ()).unwrap(), 0.0);
        assert_relative_eq!(
            ShiftedSphere { n: 2, shift: 3.0 }
                .evaluate(&[3.0; 2], &mut ())
                .unwrap(),
            0.0
        );
        assert_relative_eq!(
            Rosenbrock { n: 2 }.evaluate(&[1.0; 2], &mut ()).unwrap(),
            0.0
        );
    }
}
