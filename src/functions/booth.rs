//! Booth test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Booth function (2D)
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

/// Analytic gradient of [`booth`].
pub fn booth_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    booth_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`booth`] into `g`.
pub fn booth_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let a = x1 + 2.0 * x2 - 7.0;
    let b = 2.0 * x1 + x2 - 5.0;
    g[0] = 2.0 * a + 4.0 * b;
    g[1] = 4.0 * a + 2.0 * b;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "booth",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Unimodal,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |_| vec![-5.0, -5.0],
        |_| vec![1.0, 3.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(booth, booth_grad, booth_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_booth_minimum() {
        let x = Array1::from_vec(vec![1.0, 3.0]);
        assert_abs_diff_eq!(booth(&x), 0.0);
        assert_abs_diff_eq!(booth_grad(&x)[0], 0.0);
        assert_abs_diff_eq!(booth_grad(&x)[1], 0.0);
    }

    #[test]
    fn test_booth_known_value() {
        // f(0, 0) = 49 + 25
        let x = Array1::from_vec(vec![0.0, 0.0]);
        assert_abs_diff_eq!(booth(&x), 74.0);
    }
}
