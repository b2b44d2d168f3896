use crate::{traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A position in parameter space paired with its fitness.
///
/// An unevaluated [`Point`] carries `fx = +inf`, so any real evaluation compares as an
/// improvement. Adopting a [`Point`] as a best record must always clone it: best records hold
/// their own copy of the position and never alias a particle's live coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    /// The point's position.
    pub x: DVector<Float>,
    /// The fitness at [`Point::x`] (`+inf` if the point has not been evaluated).
    #[serde(default = "infinity")]
    pub fx: Float,
}

fn infinity() -> Float {
    Float::INFINITY
}

impl Point {
    /// Creates an unevaluated point at `x`.
    pub fn new(x: DVector<Float>) -> Self {
        Self {
            x,
            fx: Float::INFINITY,
        }
    }
    /// Evaluates the given function at the point's position and stores the result in
    /// [`Point::fx`].
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        self.fx = func.evaluate(self.x.as_slice(), user_data)?;
        Ok(())
    }
    /// Moves the point to a new position. The stored fitness is stale until the next
    /// [`Point::evaluate`] call.
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
    }
    /// Compares two points by fitness.
    ///
    /// Uses [`Float::total_cmp`], which orders NaN above every real value, so a NaN fitness is
    /// never an improvement over any evaluated point.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fx.total_cmp(&other.fx)
    }
    /// Converts the [`Point`] into a position-fitness tuple.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        (self.x, self.fx)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(DVector::zeros(0))
    }
}

impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        Self::new(DVector::from_vec(value))
    }
}
impl From<&[Float]> for Point {
    fn from(value: &[Float]) -> Self {
        Self::new(DVector::from_column_slice(value))
    }
}
impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.fx == other.fx
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.fx.partial_cmp(&other.fx)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Sphere;
    use nalgebra::dvector;
    use std::cmp::Ordering;

    #[test]
    fn test_new_point_is_unevaluated() {
        let p = Point::from(vec![1.0, 2.0]);
        assert_eq!(p.fx, Float::INFINITY);
    }

    #[test]
    fn test_evaluate_sets_fitness() {
        let mut p = Point::from(vec![3.0, 4.0]);
        p.evaluate(&Sphere { n: 2 }, &mut ()).unwrap();
        assert_eq!(p.fx, 25.0);
    }

    #[test]
    fn test_total_cmp_orders_by_fitness() {
        let a = Point {
            x: dvector![0.0],
            fx: 1.0,
        };
        let b = Point {
            x: dvector![0.0],
            fx: 2.0,
        };
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
    }

    #[test]
    fn test_nan_is_never_an_improvement() {
        let nan = Point {
            x: dvector![0.0],
            fx: Float::NAN,
        };
        let inf = Point {
            x: dvector![0.0],
            fx: Float::INFINITY,
        };
        assert_eq!(nan.total_cmp(&inf), Ordering::Greater);
    }

    #[test]
    fn test_destructure() {
        let p = Point {
            x: dvector![1.0, 2.0],
            fx: 5.0,
        };
        let (x, fx) = p.destructure();
        assert_eq!(x, dvector![1.0, 2.0]);
        assert_eq!(fx, 5.0);
    }
}
