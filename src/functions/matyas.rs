//! Matyas test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Matyas function (2D) - nearly flat plate
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub fn matyas(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1.powi(2) + x2.powi(2)) - 0.48 * x1 * x2
}

/// Analytic gradient of [`matyas`].
pub fn matyas_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    matyas_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`matyas`] into `g`.
pub fn matyas_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    g[0] = 0.52 * x[0] - 0.48 * x[1];
    g[1] = 0.52 * x[1] - 0.48 * x[0];
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "matyas",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Unimodal,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |_| vec![8.0, -8.0],
        |_| vec![0.0, 0.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(matyas, matyas_grad, matyas_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matyas_values() {
        assert_eq!(matyas(&Array1::from_vec(vec![0.0, 0.0])), 0.0);
        // 0.26*128 + 0.48*64
        let x = Array1::from_vec(vec![8.0, -8.0]);
        assert_abs_diff_eq!(matyas(&x), 64.0, epsilon = 1e-12);
    }
}
