use crate::Float;
use fastrand::Rng;
use fastrand_contrib::RngExt;

/// A helper trait to get feature-gated floating-point random values.
pub trait SampleFloat {
    /// Get a random value in a range.
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`.
    fn float(&mut self) -> Float;
    /// Get a random sign, `+1` or `-1` with equal probability.
    fn sign(&mut self) -> Float {
        if self.float() < 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}
impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        // fastrand ranges must be non-degenerate
        if lower < upper {
            self.f64_range(lower..upper)
        } else {
            lower
        }
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        if lower < upper {
            self.f32_range(lower..upper)
        } else {
            lower
        }
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}
