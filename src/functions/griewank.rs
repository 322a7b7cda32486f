//! Griewank test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum_squares / 4000.0 - product_cos
}

/// Analytic gradient of [`griewank`].
pub fn griewank_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    griewank_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`griewank`] into `g`.
pub fn griewank_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len();
    for i in 0..n {
        let si = ((i + 1) as f64).sqrt();
        // Product over every other coordinate; quadratic in n but the
        // catalogue is evaluated at small n.
        let rest: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| (x[j] / ((j + 1) as f64).sqrt()).cos())
            .product();
        g[i] = x[i] / 2000.0 + (x[i] / si).sin() / si * rest;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "griewank",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
        ]),
        |n| vec![(-600.0, 600.0); n],
        |n| vec![400.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?
    .with_provenance("Griewank (1981)");
    Ok(TestFunction::new(
        griewank,
        griewank_grad,
        griewank_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_griewank_minimum() {
        let zero = Array1::zeros(3);
        assert_abs_diff_eq!(griewank(&zero), 0.0, epsilon = 1e-12);
        let g = griewank_grad(&zero);
        for gi in g.iter() {
            assert_abs_diff_eq!(*gi, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_griewank_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![12.0, -7.5]);
        let g = griewank_grad(&x);
        let h = 1e-6;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (griewank(&fwd) - griewank(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-6);
        }
    }
}
