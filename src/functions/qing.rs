//! Qing test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Qing function - separable with 2^n symmetric global minima
/// Global minimum: f(x) = 0 at x_i = +-sqrt(i+1), i zero-based
/// Bounds: x_i in [-500, 500]
pub fn qing(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (xi.powi(2) - (i + 1) as f64).powi(2))
        .sum()
}

/// Analytic gradient of [`qing`].
pub fn qing_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    qing_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`qing`] into `g`.
pub fn qing_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (i, (gi, &xi)) in g.iter_mut().zip(x.iter()).enumerate() {
        *gi = 4.0 * xi * (xi.powi(2) - (i + 1) as f64);
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "qing",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
            Property::Separable,
        ]),
        |n| vec![(-500.0, 500.0); n],
        |n| vec![10.0; n],
        |n| (0..n).map(|i| ((i + 1) as f64).sqrt()).collect(),
        |_| 0.0,
    )?
    .with_provenance("Qing (2006)");
    Ok(TestFunction::new(qing, qing_grad, qing_grad_into, metadata))
}
