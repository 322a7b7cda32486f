//! Chung Reynolds test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Chung-Reynolds function - squared sphere
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn chung_reynolds(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum::<f64>().powi(2)
}

/// Analytic gradient of [`chung_reynolds`].
pub fn chung_reynolds_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    chung_reynolds_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`chung_reynolds`] into `g`.
pub fn chung_reynolds_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let s: f64 = x.iter().map(|&xi| xi * xi).sum();
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = 4.0 * s * xi;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "chung_reynolds",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Unimodal,
        ]),
        |n| vec![(-100.0, 100.0); n],
        |n| vec![50.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        chung_reynolds,
        chung_reynolds_grad,
        chung_reynolds_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chung_reynolds_values() {
        assert_eq!(chung_reynolds(&Array1::zeros(3)), 0.0);
        // (1 + 4)^2
        assert_eq!(chung_reynolds(&Array1::from_vec(vec![1.0, 2.0])), 25.0);
    }
}
