//! Colville test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Colville function (4D) - two coupled Rosenbrock-like valleys
/// Global minimum: f(x) = 0 at x = (1, 1, 1, 1)
/// Bounds: x_i in [-10, 10]
pub fn colville(x: &Array1<f64>) -> f64 {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    100.0 * (x1.powi(2) - x2).powi(2)
        + (x1 - 1.0).powi(2)
        + (x3 - 1.0).powi(2)
        + 90.0 * (x3.powi(2) - x4).powi(2)
        + 10.1 * ((x2 - 1.0).powi(2) + (x4 - 1.0).powi(2))
        + 19.8 * (x2 - 1.0) * (x4 - 1.0)
}

/// Analytic gradient of [`colville`].
pub fn colville_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    colville_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`colville`] into `g`.
pub fn colville_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    let a = x1.powi(2) - x2;
    let b = x3.powi(2) - x4;
    g[0] = 400.0 * x1 * a + 2.0 * (x1 - 1.0);
    g[1] = -200.0 * a + 20.2 * (x2 - 1.0) + 19.8 * (x4 - 1.0);
    g[2] = 360.0 * x3 * b + 2.0 * (x3 - 1.0);
    g[3] = -180.0 * b + 20.2 * (x4 - 1.0) + 19.8 * (x2 - 1.0);
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "colville",
        Arity::Fixed(4),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |_| vec![-3.0, -1.0, -3.0, -1.0],
        |_| vec![1.0; 4],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        colville,
        colville_grad,
        colville_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_colville_minimum() {
        let x = Array1::from_elem(4, 1.0);
        assert_eq!(colville(&x), 0.0);
        let g = colville_grad(&x);
        for gi in g.iter() {
            assert_abs_diff_eq!(*gi, 0.0);
        }
    }

    #[test]
    fn test_colville_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![0.5, -1.5, 2.0, 0.3]);
        let g = colville_grad(&x);
        let h = 1e-6;
        for j in 0..4 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (colville(&fwd) - colville(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-4);
        }
    }
}
