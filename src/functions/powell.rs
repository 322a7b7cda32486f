//! Powell test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Powell function (4D) - singular Hessian at the optimum
/// Global minimum: f(x) = 0 at x = (0, 0, 0, 0)
/// Bounds: x_i in [-4, 5]
pub fn powell(x: &Array1<f64>) -> f64 {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    (x1 + 10.0 * x2).powi(2)
        + 5.0 * (x3 - x4).powi(2)
        + (x2 - 2.0 * x3).powi(4)
        + 10.0 * (x1 - x4).powi(4)
}

/// Analytic gradient of [`powell`].
pub fn powell_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    powell_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`powell`] into `g`.
pub fn powell_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    let a = x1 + 10.0 * x2;
    let b = x3 - x4;
    let c = (x2 - 2.0 * x3).powi(3);
    let d = (x1 - x4).powi(3);
    g[0] = 2.0 * a + 40.0 * d;
    g[1] = 20.0 * a + 4.0 * c;
    g[2] = 10.0 * b - 8.0 * c;
    g[3] = -10.0 * b - 40.0 * d;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "powell",
        Arity::Fixed(4),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Unimodal,
        ]),
        |n| vec![(-4.0, 5.0); n],
        |_| vec![3.0, -1.0, 0.0, 1.0],
        |_| vec![0.0; 4],
        |_| 0.0,
    )?
    .with_provenance("Powell (1962)");
    Ok(TestFunction::new(powell, powell_grad, powell_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_powell_minimum() {
        let x = Array1::zeros(4);
        assert_eq!(powell(&x), 0.0);
    }

    #[test]
    fn test_powell_classic_start() {
        // f(3, -1, 0, 1) = 49 + 5 + 1 + 160
        let x = Array1::from_vec(vec![3.0, -1.0, 0.0, 1.0]);
        assert_abs_diff_eq!(powell(&x), 215.0, epsilon = 1e-12);
    }
}
