//! Levy N.13 test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Levy N.13 function (2D)
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub fn levy_n13(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (3.0 * PI * x1).sin().powi(2)
        + (x1 - 1.0).powi(2) * (1.0 + (3.0 * PI * x2).sin().powi(2))
        + (x2 - 1.0).powi(2) * (1.0 + (2.0 * PI * x2).sin().powi(2))
}

/// Analytic gradient of [`levy_n13`].
pub fn levy_n13_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    levy_n13_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`levy_n13`] into `g`.
pub fn levy_n13_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let s3y = (3.0 * PI * x2).sin();
    let s2y = (2.0 * PI * x2).sin();
    g[0] = 3.0 * PI * (6.0 * PI * x1).sin() + 2.0 * (x1 - 1.0) * (1.0 + s3y.powi(2));
    g[1] = 3.0 * PI * (x1 - 1.0).powi(2) * (6.0 * PI * x2).sin()
        + 2.0 * (x2 - 1.0) * (1.0 + s2y.powi(2))
        + 2.0 * PI * (x2 - 1.0).powi(2) * (4.0 * PI * x2).sin();
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "levy_n13",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |_| vec![-5.0, -7.0],
        |_| vec![1.0, 1.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        levy_n13,
        levy_n13_grad,
        levy_n13_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_levy_n13_minimum() {
        let x = Array1::from_vec(vec![1.0, 1.0]);
        assert_abs_diff_eq!(levy_n13(&x), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_levy_n13_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![2.3, -4.1]);
        let g = levy_n13_grad(&x);
        let h = 1e-6;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (levy_n13(&fwd) - levy_n13(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-4);
        }
    }
}
