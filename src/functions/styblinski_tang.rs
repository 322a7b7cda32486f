//! Styblinski-Tang test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Root of 4t^3 - 32t + 5, the per-coordinate minimizer.
const MINIMIZER: f64 = -2.903534018185960;

/// Function value per coordinate at the minimizer.
const MIN_PER_DIM: f64 = -39.16616570377142;

/// Styblinski-Tang function - multimodal with 2^n local minima
/// Global minimum: f(x) = -39.16617 n at x_i = -2.903534
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    0.5 * x
        .iter()
        .map(|&xi| xi.powi(4) - 16.0 * xi.powi(2) + 5.0 * xi)
        .sum::<f64>()
}

/// Analytic gradient of [`styblinski_tang`].
pub fn styblinski_tang_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    styblinski_tang_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`styblinski_tang`] into `g`.
pub fn styblinski_tang_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = 2.0 * xi.powi(3) - 16.0 * xi + 2.5;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "styblinski_tang",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
            Property::Separable,
        ]),
        |n| vec![(-5.0, 5.0); n],
        |n| vec![4.0; n],
        |n| vec![MINIMIZER; n],
        |n| MIN_PER_DIM * n as f64,
    )?
    .with_provenance("Styblinski & Tang (1990)");
    Ok(TestFunction::new(
        styblinski_tang,
        styblinski_tang_grad,
        styblinski_tang_grad_into,
        metadata,
    ))
}
