//! Six Hump Camel test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Six-hump camel function (2D) - six local minima, two of them global
/// Global minimum: f(x) = -1.031628 at (0.0898, -0.7126) and
/// (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}

/// Analytic gradient of [`six_hump_camel`].
pub fn six_hump_camel_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    six_hump_camel_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`six_hump_camel`] into `g`.
pub fn six_hump_camel_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    g[0] = 8.0 * x1 - 8.4 * x1.powi(3) + 2.0 * x1.powi(5) + x2;
    g[1] = x1 - 8.0 * x2 + 16.0 * x2.powi(3);
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "six_hump_camel",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |_| vec![(-3.0, 3.0), (-2.0, 2.0)],
        |_| vec![-2.0, 1.5],
        |_| vec![0.08984201368301331, -0.7126564032704135],
        |_| -1.031628453489877,
    )?;
    Ok(TestFunction::new(
        six_hump_camel,
        six_hump_camel_grad,
        six_hump_camel_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_six_hump_camel_both_global_minima() {
        let expected = -1.031628453489877;
        for m in [
            [0.08984201368301331, -0.7126564032704135],
            [-0.08984201368301331, 0.7126564032704135],
        ] {
            let x = Array1::from_vec(m.to_vec());
            assert_abs_diff_eq!(six_hump_camel(&x), expected, epsilon = 1e-9);
            let g = six_hump_camel_grad(&x);
            assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-6);
        }
    }
}
