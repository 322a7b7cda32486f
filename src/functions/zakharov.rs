//! Zakharov test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

fn weighted_sum(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 0.5 * (i + 1) as f64 * xi)
        .sum()
}

/// Zakharov function - plate-shaped, no local minima besides the global one
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: &Array1<f64>) -> f64 {
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let s = weighted_sum(x);
    sum_sq + s.powi(2) + s.powi(4)
}

/// Analytic gradient of [`zakharov`].
pub fn zakharov_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    zakharov_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`zakharov`] into `g`.
pub fn zakharov_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let s = weighted_sum(x);
    let chain = 2.0 * s + 4.0 * s.powi(3);
    for (i, (gi, &xi)) in g.iter_mut().zip(x.iter()).enumerate() {
        *gi = 2.0 * xi + chain * 0.5 * (i + 1) as f64;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "zakharov",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Unimodal,
        ]),
        |n| vec![(-5.0, 10.0); n],
        |n| vec![5.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        zakharov,
        zakharov_grad,
        zakharov_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zakharov_minimum() {
        let zero = Array1::zeros(5);
        assert_eq!(zakharov(&zero), 0.0);
    }

    #[test]
    fn test_zakharov_known_value() {
        // s = 0.5*1 + 1.0*1 = 1.5 -> 2 + 2.25 + 5.0625
        let x = Array1::from_vec(vec![1.0, 1.0]);
        assert_abs_diff_eq!(zakharov(&x), 9.3125, epsilon = 1e-12);
    }
}
