//! Beale test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Beale function (2D) - narrow curved valley with steep walls
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn beale(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}

/// Analytic gradient of [`beale`].
pub fn beale_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    beale_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`beale`] into `g`.
pub fn beale_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let t1 = 1.5 - x1 + x1 * x2;
    let t2 = 2.25 - x1 + x1 * x2.powi(2);
    let t3 = 2.625 - x1 + x1 * x2.powi(3);
    g[0] = 2.0 * t1 * (x2 - 1.0) + 2.0 * t2 * (x2.powi(2) - 1.0) + 2.0 * t3 * (x2.powi(3) - 1.0);
    g[1] = 2.0 * t1 * x1 + 4.0 * t2 * x1 * x2 + 6.0 * t3 * x1 * x2.powi(2);
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "beale",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
        ]),
        |n| vec![(-4.5, 4.5); n],
        |_| vec![-4.0, -4.0],
        |_| vec![3.0, 0.5],
        |_| 0.0,
    )?
    .with_provenance("Beale (1958)");
    Ok(TestFunction::new(beale, beale_grad, beale_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_beale_minimum() {
        let x = Array1::from_vec(vec![3.0, 0.5]);
        assert_abs_diff_eq!(beale(&x), 0.0, epsilon = 1e-12);
        let g = beale_grad(&x);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beale_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![1.7, -0.8]);
        let g = beale_grad(&x);
        let h = 1e-6;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (beale(&fwd) - beale(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-4);
        }
    }
}
