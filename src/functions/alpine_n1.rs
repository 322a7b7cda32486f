//! Alpine N.1 test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Alpine N.1 function - multimodal with kinks wherever a term changes sign
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn alpine_n1(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| (xi * xi.sin() + 0.1 * xi).abs())
        .sum()
}

/// Almost-everywhere gradient of [`alpine_n1`]; undefined on the kink set.
pub fn alpine_n1_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    alpine_n1_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`alpine_n1`] into `g`.
pub fn alpine_n1_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        let u = xi * xi.sin() + 0.1 * xi;
        *gi = u.signum() * (xi.sin() + xi * xi.cos() + 0.1);
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "alpine_n1",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Multimodal,
            Property::PartiallyDifferentiable,
            Property::Scalable,
            Property::Separable,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |n| vec![7.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        alpine_n1,
        alpine_n1_grad,
        alpine_n1_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_alpine_n1_minimum() {
        let zero = Array1::zeros(2);
        assert_eq!(alpine_n1(&zero), 0.0);
    }

    #[test]
    fn test_alpine_n1_known_value() {
        // f(7, 7) = 2 * |7 sin(7) + 0.7|
        let x = Array1::from_vec(vec![7.0, 7.0]);
        let expected = 2.0 * (7.0 * 7.0f64.sin() + 0.7).abs();
        assert_abs_diff_eq!(alpine_n1(&x), expected, epsilon = 1e-12);
    }
}
