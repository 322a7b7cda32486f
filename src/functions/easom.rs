//! Easom test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Easom function (2D) - a needle-shaped basin in a nearly flat plain
/// Global minimum: f(x) = -1 at x = (pi, pi)
/// Bounds: x_i in [-100, 100]
pub fn easom(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp()
}

/// Analytic gradient of [`easom`].
pub fn easom_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    easom_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`easom`] into `g`.
pub fn easom_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let e = (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp();
    g[0] = e * x2.cos() * (x1.sin() + 2.0 * (x1 - PI) * x1.cos());
    g[1] = e * x1.cos() * (x2.sin() + 2.0 * (x2 - PI) * x2.cos());
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "easom",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-100.0, 100.0); n],
        |_| vec![0.0, 0.0],
        |_| vec![PI, PI],
        |_| -1.0,
    )?;
    Ok(TestFunction::new(easom, easom_grad, easom_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_easom_minimum() {
        let x = Array1::from_vec(vec![PI, PI]);
        assert_abs_diff_eq!(easom(&x), -1.0, epsilon = 1e-12);
        let g = easom_grad(&x);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_easom_far_from_basin() {
        // The Gaussian envelope flattens the surface away from (pi, pi).
        let x = Array1::from_vec(vec![0.0, 0.0]);
        assert!(easom(&x).abs() < 1e-8);
    }
}
