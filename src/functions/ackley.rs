//! Ackley test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + 20.0
        + std::f64::consts::E
}

/// Analytic gradient of [`ackley`], away from the conical point at the
/// origin (where the radial term is taken as zero).
pub fn ackley_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    ackley_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`ackley`] into `g`.
pub fn ackley_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();
    let r = (sum_sq / n).sqrt();
    let radial = if r > 0.0 {
        4.0 * (-0.2 * r).exp() / (n * r)
    } else {
        0.0
    };
    let cos_term = (sum_cos / n).exp();
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = radial * xi + (2.0 * PI / n) * (2.0 * PI * xi).sin() * cos_term;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "ackley",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Multimodal,
            Property::PartiallyDifferentiable,
            Property::Scalable,
        ]),
        |n| vec![(-32.768, 32.768); n],
        |n| vec![20.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?
    .with_provenance("Ackley (1987)");
    Ok(TestFunction::new(ackley, ackley_grad, ackley_grad_into, metadata))
}
