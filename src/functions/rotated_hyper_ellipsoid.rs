//! Rotated Hyper-Ellipsoid test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Rotated hyper-ellipsoid function - nested sums of squares; equivalent to
/// a sum of squares weighted by (n - i)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-65.536, 65.536]
pub fn rotated_hyper_ellipsoid(x: &Array1<f64>) -> f64 {
    let n = x.len();
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (n - i) as f64 * xi * xi)
        .sum()
}

/// Analytic gradient of [`rotated_hyper_ellipsoid`].
pub fn rotated_hyper_ellipsoid_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    rotated_hyper_ellipsoid_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`rotated_hyper_ellipsoid`] into `g`.
pub fn rotated_hyper_ellipsoid_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len();
    for (i, (gi, &xi)) in g.iter_mut().zip(x.iter()).enumerate() {
        *gi = 2.0 * (n - i) as f64 * xi;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "rotated_hyper_ellipsoid",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Unimodal,
        ]),
        |n| vec![(-65.536, 65.536); n],
        |n| vec![30.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        rotated_hyper_ellipsoid,
        rotated_hyper_ellipsoid_grad,
        rotated_hyper_ellipsoid_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_hyper_ellipsoid_values() {
        assert_eq!(rotated_hyper_ellipsoid(&Array1::zeros(4)), 0.0);
        // 2*1 + 1*4 = 6
        assert_eq!(
            rotated_hyper_ellipsoid(&Array1::from_vec(vec![1.0, 2.0])),
            6.0
        );
    }
}
