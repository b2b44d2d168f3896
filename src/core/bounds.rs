use crate::{core::utils::SampleFloat, DVector, Float};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt::Display};

/// The error returned when constructing [`Bounds`] from invalid limits.
///
/// None of these conditions are recoverable at runtime; the caller must fix the inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidBoundsError {
    /// The limit vectors were empty (the search space must have at least one dimension).
    Empty,
    /// The lower and upper limit vectors had different lengths.
    LengthMismatch {
        /// Length of the lower limit vector.
        lower: usize,
        /// Length of the upper limit vector.
        upper: usize,
    },
    /// A lower limit was greater than the matching upper limit.
    InvertedBound {
        /// The offending dimension.
        index: usize,
        /// The lower limit at that dimension.
        lower: Float,
        /// The upper limit at that dimension.
        upper: Float,
    },
    /// A limit was NaN or infinite (the feasible box must be finite to sample from).
    NonFiniteBound {
        /// The offending dimension.
        index: usize,
    },
}

impl Display for InvalidBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "bounds must contain at least one dimension"),
            Self::LengthMismatch { lower, upper } => write!(
                f,
                "lower and upper limits differ in length ({} vs {})",
                lower, upper
            ),
            Self::InvertedBound {
                index,
                lower,
                upper,
            } => write!(
                f,
                "invalid interval [{}, {}] at dimension {}: limits must satisfy lower <= upper",
                lower, upper, index
            ),
            Self::NonFiniteBound { index } => {
                write!(f, "non-finite limit at dimension {}", index)
            }
        }
    }
}

impl Error for InvalidBoundsError {}

/// An axis-aligned box of per-dimension lower and upper limits.
///
/// [`Bounds`] define the feasible region of an optimization. They are validated once at
/// construction, so every [`Bounds`] value in circulation satisfies `lower[i] <= upper[i]`
/// with finite limits in every dimension.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    lower: DVector<Float>,
    upper: DVector<Float>,
}

impl Bounds {
    /// Creates a new set of [`Bounds`] from parallel lower and upper limit vectors.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidBoundsError`] if the vectors are empty, differ in length, contain a
    /// non-finite limit, or contain a dimension where `lower > upper`.
    pub fn new(
        lower: impl Into<DVector<Float>>,
        upper: impl Into<DVector<Float>>,
    ) -> Result<Self, InvalidBoundsError> {
        let lower = lower.into();
        let upper = upper.into();
        if lower.len() != upper.len() {
            return Err(InvalidBoundsError::LengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(InvalidBoundsError::Empty);
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(InvalidBoundsError::NonFiniteBound { index });
            }
            if lo > hi {
                return Err(InvalidBoundsError::InvertedBound {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }
    /// The number of dimensions of the feasible box.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }
    /// The lower limits.
    pub const fn lower(&self) -> &DVector<Float> {
        &self.lower
    }
    /// The upper limits.
    pub const fn upper(&self) -> &DVector<Float> {
        &self.upper
    }
    /// The per-dimension widths `upper - lower`.
    pub fn width(&self) -> DVector<Float> {
        &self.upper - &self.lower
    }
    /// Checks whether `x` lies inside the box (inclusive of the boundary).
    pub fn contains(&self, x: &DVector<Float>) -> bool {
        x.iter()
            .zip(self.lower.iter())
            .zip(self.upper.iter())
            .all(|((&x_i, &lo), &hi)| x_i >= lo && x_i <= hi)
    }
    /// Projects `x`, per dimension, onto the nearest feasible value.
    ///
    /// A no-op for values already inside the box. The velocity that produced the violating
    /// position is not the concern of this method and is left untouched by callers.
    pub fn clamp(&self, x: &mut DVector<Float>) {
        for ((x_i, &lo), &hi) in x.iter_mut().zip(self.lower.iter()).zip(self.upper.iter()) {
            *x_i = x_i.clamp(lo, hi);
        }
    }
    /// Draws a position uniformly from the box, one independent draw per dimension.
    pub fn random_position(&self, rng: &mut Rng) -> DVector<Float> {
        DVector::from_iterator(
            self.dimension(),
            self.lower
                .iter()
                .zip(self.upper.iter())
                .map(|(&lo, &hi)| rng.range(lo, hi)),
        )
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let intervals = self
            .lower
            .iter()
            .zip(self.upper.iter())
            .map(|(lo, hi)| format!("({}, {})", lo, hi))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", intervals)
    }
}

impl TryFrom<Vec<(Float, Float)>> for Bounds {
    type Error = InvalidBoundsError;
    fn try_from(limits: Vec<(Float, Float)>) -> Result<Self, Self::Error> {
        let (lower, upper): (Vec<Float>, Vec<Float>) = limits.into_iter().unzip();
        Self::new(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_inverted_limits_are_rejected() {
        let err = Bounds::new(vec![0.0, 5.0], vec![10.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            InvalidBoundsError::InvertedBound {
                index: 1,
                lower: 5.0,
                upper: 2.0
            }
        );
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = Bounds::new(vec![0.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, InvalidBoundsError::LengthMismatch { lower: 1, upper: 2 });
    }

    #[test]
    fn test_empty_limits_are_rejected() {
        let err = Bounds::new(Vec::<Float>::new(), Vec::<Float>::new()).unwrap_err();
        assert_eq!(err, InvalidBoundsError::Empty);
    }

    #[test]
    fn test_non_finite_limits_are_rejected() {
        let err = Bounds::new(vec![0.0], vec![Float::INFINITY]).unwrap_err();
        assert_eq!(err, InvalidBoundsError::NonFiniteBound { index: 0 });
        let err = Bounds::new(vec![Float::NAN], vec![1.0]).unwrap_err();
        assert_eq!(err, InvalidBoundsError::NonFiniteBound { index: 0 });
    }

    #[test]
    fn test_try_from_tuples() {
        let bounds = Bounds::try_from(vec![(-1.0, 1.0), (0.0, 10.0)]).unwrap();
        assert_eq!(bounds.dimension(), 2);
        assert_eq!(bounds.width(), dvector![2.0, 10.0]);
    }

    #[test]
    fn test_contains_and_boundary() {
        let bounds = Bounds::new(vec![-1.0, 0.0], vec![1.0, 2.0]).unwrap();
        assert!(bounds.contains(&dvector![0.0, 1.0]));
        assert!(bounds.contains(&dvector![-1.0, 2.0]));
        assert!(!bounds.contains(&dvector![-1.1, 1.0]));
        assert!(!bounds.contains(&dvector![0.0, 2.1]));
    }

    #[test]
    fn test_clamp_projects_onto_nearest_limit() {
        let bounds = Bounds::new(vec![-1.0, 0.0], vec![1.0, 2.0]).unwrap();
        let mut x = dvector![-3.0, 5.0];
        bounds.clamp(&mut x);
        assert_eq!(x, dvector![-1.0, 2.0]);
    }

    #[test]
    fn test_clamp_is_idempotent_in_bounds() {
        let bounds = Bounds::new(vec![-1.0, 0.0], vec![1.0, 2.0]).unwrap();
        let mut x = dvector![0.5, 1.5];
        bounds.clamp(&mut x);
        assert_eq!(x, dvector![0.5, 1.5]);
    }

    #[test]
    fn test_random_position_stays_inside() {
        let bounds = Bounds::new(vec![-5.0, 0.0, 2.0], vec![5.0, 0.0, 3.0]).unwrap();
        let mut rng = fastrand::Rng::with_seed(0);
        for _ in 0..100 {
            let x = bounds.random_position(&mut rng);
            assert!(bounds.contains(&x));
            // degenerate dimension always samples its single feasible value
            assert_eq!(x[1], 0.0);
        }
    }
}
