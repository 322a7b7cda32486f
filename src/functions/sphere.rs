//! Sphere test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Sphere function - the simplest quadratic bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Analytic gradient of [`sphere`].
pub fn sphere_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    sphere_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`sphere`] into `g`.
pub fn sphere_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = 2.0 * xi;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "sphere",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Separable,
            Property::Unimodal,
        ]),
        |n| vec![(-5.12, 5.12); n],
        |n| vec![3.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?
    .with_provenance("De Jong (1975), function F1");
    Ok(TestFunction::new(sphere, sphere_grad, sphere_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sphere_values() {
        assert_eq!(sphere(&Array1::from_vec(vec![0.0, 0.0])), 0.0);
        assert_eq!(sphere(&Array1::from_vec(vec![1.0, 2.0, 3.0])), 14.0);
    }

    #[test]
    fn test_sphere_gradient() {
        let x = Array1::from_vec(vec![1.0, -2.0]);
        let g = sphere_grad(&x);
        assert_abs_diff_eq!(g[0], 2.0);
        assert_abs_diff_eq!(g[1], -4.0);
    }
}
