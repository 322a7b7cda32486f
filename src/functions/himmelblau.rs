//! Himmelblau test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Himmelblau's function (2D) - four identical global minima
/// Global minimum: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186) and (3.584428, -1.848126)
/// Bounds: x_i in [-6, 6]
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1.powi(2) + x2 - 11.0).powi(2) + (x1 + x2.powi(2) - 7.0).powi(2)
}

/// Analytic gradient of [`himmelblau`].
pub fn himmelblau_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    himmelblau_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`himmelblau`] into `g`.
pub fn himmelblau_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let a = x1.powi(2) + x2 - 11.0;
    let b = x1 + x2.powi(2) - 7.0;
    g[0] = 4.0 * x1 * a + 2.0 * b;
    g[1] = 2.0 * a + 4.0 * x2 * b;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "himmelblau",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-6.0, 6.0); n],
        |_| vec![0.0, 0.0],
        |_| vec![3.0, 2.0],
        |_| 0.0,
    )?
    .with_provenance("Himmelblau (1972)");
    Ok(TestFunction::new(
        himmelblau,
        himmelblau_grad,
        himmelblau_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_himmelblau_all_four_minima() {
        for m in [
            [3.0, 2.0],
            [-2.805118, 3.131312],
            [-3.779310, -3.283186],
            [3.584428, -1.848126],
        ] {
            let x = Array1::from_vec(m.to_vec());
            assert_abs_diff_eq!(himmelblau(&x), 0.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_himmelblau_origin() {
        // f(0, 0) = 121 + 49
        let x = Array1::from_vec(vec![0.0, 0.0]);
        assert_abs_diff_eq!(himmelblau(&x), 170.0);
    }
}
