//! Goldstein-Price test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Goldstein-Price function (2D) - several local minima on a steep surface
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let u = x1 + x2 + 1.0;
    let p = 19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2 + 6.0 * x1 * x2 + 3.0 * x2.powi(2);
    let v = 2.0 * x1 - 3.0 * x2;
    let q = 18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2 + 27.0 * x2.powi(2);
    (1.0 + u.powi(2) * p) * (30.0 + v.powi(2) * q)
}

/// Analytic gradient of [`goldstein_price`].
pub fn goldstein_price_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    goldstein_price_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`goldstein_price`] into `g`.
pub fn goldstein_price_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let u = x1 + x2 + 1.0;
    let p = 19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2 + 6.0 * x1 * x2 + 3.0 * x2.powi(2);
    let v = 2.0 * x1 - 3.0 * x2;
    let q = 18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2 + 27.0 * x2.powi(2);

    let a = 1.0 + u.powi(2) * p;
    let bb = 30.0 + v.powi(2) * q;

    // dp/dx1 = dp/dx2 by the symmetry of p's cross terms.
    let dp = -14.0 + 6.0 * x1 + 6.0 * x2;
    let da_dx1 = 2.0 * u * p + u.powi(2) * dp;
    let da_dx2 = da_dx1;

    let dq_dx1 = -32.0 + 24.0 * x1 - 36.0 * x2;
    let dq_dx2 = 48.0 - 36.0 * x1 + 54.0 * x2;
    let db_dx1 = 4.0 * v * q + v.powi(2) * dq_dx1;
    let db_dx2 = -6.0 * v * q + v.powi(2) * dq_dx2;

    g[0] = da_dx1 * bb + a * db_dx1;
    g[1] = da_dx2 * bb + a * db_dx2;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "goldstein_price",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-2.0, 2.0); n],
        |_| vec![1.5, 1.5],
        |_| vec![0.0, -1.0],
        |_| 3.0,
    )?
    .with_provenance("Goldstein & Price (1971)");
    Ok(TestFunction::new(
        goldstein_price,
        goldstein_price_grad,
        goldstein_price_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_goldstein_price_minimum() {
        let x = Array1::from_vec(vec![0.0, -1.0]);
        assert_abs_diff_eq!(goldstein_price(&x), 3.0, epsilon = 1e-10);
        let g = goldstein_price_grad(&x);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_goldstein_price_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![0.7, -1.4]);
        let g = goldstein_price_grad(&x);
        let h = 1e-6;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (goldstein_price(&fwd) - goldstein_price(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-3);
        }
    }
}
