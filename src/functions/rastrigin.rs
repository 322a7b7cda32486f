//! Rastrigin test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Rastrigin function - highly multimodal with a regular lattice of minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Analytic gradient of [`rastrigin`].
pub fn rastrigin_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    rastrigin_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`rastrigin`] into `g`.
pub fn rastrigin_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = 2.0 * xi + 20.0 * PI * (2.0 * PI * xi).sin();
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "rastrigin",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
            Property::Separable,
        ]),
        |n| vec![(-5.12, 5.12); n],
        |n| vec![4.2; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?
    .with_provenance("Rastrigin (1974)");
    Ok(TestFunction::new(
        rastrigin,
        rastrigin_grad,
        rastrigin_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rastrigin_minimum() {
        let zero = Array1::zeros(4);
        assert_abs_diff_eq!(rastrigin(&zero), 0.0, epsilon = 1e-12);
        let g = rastrigin_grad(&zero);
        for gi in g.iter() {
            assert_abs_diff_eq!(*gi, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rastrigin_integer_lattice() {
        // cos(2 pi k) = 1 for integer k, so f reduces to sum of squares.
        let x = Array1::from_vec(vec![1.0, -2.0]);
        assert_abs_diff_eq!(rastrigin(&x), 5.0, epsilon = 1e-9);
    }
}
