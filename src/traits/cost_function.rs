use crate::Float;
use std::convert::Infallible;

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$.
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass
/// external arguments to the function during optimization, or can be modified by the function
/// itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution. The optimizer treats the function as a deterministic black box: evaluations are
/// never cached or retried, and an `Err(E)` aborts the entire run.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to
    /// return a [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &[Float], user_data: &mut U) -> Result<Float, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear;
    impl CostFunction<Float> for Linear {
        fn evaluate(&self, x: &[Float], offset: &mut Float) -> Result<Float, Infallible> {
            Ok(x[0] + *offset)
        }
    }

    #[test]
    fn test_user_data_is_threaded_through() {
        let mut offset = 2.0;
        let y = Linear.evaluate(&[1.0], &mut offset).unwrap();
        assert_eq!(y, 3.0);
    }
}
