//! Bukin N.6 test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Bukin N.6 function (2D) - a razor-sharp parabolic ridge
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    100.0 * (x2 - 0.01 * x1.powi(2)).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

/// Almost-everywhere gradient of [`bukin_n6`]; unbounded as the ridge
/// x2 = 0.01 x1^2 is approached.
pub fn bukin_n6_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    bukin_n6_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`bukin_n6`] into `g`.
pub fn bukin_n6_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let u = x2 - 0.01 * x1.powi(2);
    let root = u.abs().sqrt();
    let du = 50.0 * u.signum() / root;
    g[0] = du * (-0.02 * x1) + 0.01 * (x1 + 10.0).signum();
    g[1] = du;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "bukin_n6",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Multimodal,
            Property::PartiallyDifferentiable,
        ]),
        |_| vec![(-15.0, -5.0), (-3.0, 3.0)],
        |_| vec![-7.5, -2.0],
        |_| vec![-10.0, 1.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        bukin_n6,
        bukin_n6_grad,
        bukin_n6_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bukin_n6_minimum() {
        let x = Array1::from_vec(vec![-10.0, 1.0]);
        assert_abs_diff_eq!(bukin_n6(&x), 0.0);
    }

    #[test]
    fn test_bukin_n6_off_ridge_value() {
        // f(-5, -3) = 100 sqrt(3.25) + 0.05
        let x = Array1::from_vec(vec![-5.0, -3.0]);
        assert_abs_diff_eq!(bukin_n6(&x), 100.0 * 3.25f64.sqrt() + 0.05, epsilon = 1e-10);
    }
}
