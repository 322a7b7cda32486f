//! Exponential test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Exponential function - inverted Gaussian bump
/// Global minimum: f(x) = -1 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// The value tends to 0 as |x| grows, so infinite inputs stay finite.
pub fn exponential(x: &Array1<f64>) -> f64 {
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    -(-0.5 * sum_sq).exp()
}

/// Analytic gradient of [`exponential`].
pub fn exponential_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    exponential_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`exponential`] into `g`.
pub fn exponential_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let e = (-0.5 * sum_sq).exp();
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = xi * e;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "exponential",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::FiniteAtInf,
            Property::Scalable,
            Property::Unimodal,
        ]),
        |n| vec![(-1.0, 1.0); n],
        |n| vec![0.8; n],
        |n| vec![0.0; n],
        |_| -1.0,
    )?;
    Ok(TestFunction::new(
        exponential,
        exponential_grad,
        exponential_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exponential_minimum() {
        let zero = Array1::zeros(3);
        assert_abs_diff_eq!(exponential(&zero), -1.0);
        let g = exponential_grad(&zero);
        for gi in g.iter() {
            assert_abs_diff_eq!(*gi, 0.0);
        }
    }

    #[test]
    fn test_exponential_finite_for_infinite_input() {
        let x = Array1::from_vec(vec![f64::INFINITY, 0.5]);
        let v = exponential(&x);
        assert!(v.is_finite());
        assert_abs_diff_eq!(v, 0.0);
    }
}
