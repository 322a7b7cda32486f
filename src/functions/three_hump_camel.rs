//! Three Hump Camel test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Three-hump camel function (2D)
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub fn three_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    2.0 * x1.powi(2) - 1.05 * x1.powi(4) + x1.powi(6) / 6.0 + x1 * x2 + x2.powi(2)
}

/// Analytic gradient of [`three_hump_camel`].
pub fn three_hump_camel_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    three_hump_camel_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`three_hump_camel`] into `g`.
pub fn three_hump_camel_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    g[0] = 4.0 * x1 - 4.2 * x1.powi(3) + x1.powi(5) + x2;
    g[1] = x1 + 2.0 * x2;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "three_hump_camel",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-5.0, 5.0); n],
        |_| vec![-3.0, 3.0],
        |_| vec![0.0, 0.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        three_hump_camel,
        three_hump_camel_grad,
        three_hump_camel_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_hump_camel_minimum() {
        let x = Array1::from_vec(vec![0.0, 0.0]);
        assert_eq!(three_hump_camel(&x), 0.0);
    }

    #[test]
    fn test_three_hump_camel_known_value() {
        // 18 - 85.05 + 121.5 - 9 + 9
        let x = Array1::from_vec(vec![-3.0, 3.0]);
        assert_abs_diff_eq!(three_hump_camel(&x), 54.45, epsilon = 1e-10);
    }
}
