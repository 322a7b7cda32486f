//! Eggholder test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Eggholder function (2D) - highly multimodal, very challenging
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319), on the edge of
/// the domain
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - x2 - 47.0).abs().sqrt().sin()
}

/// Almost-everywhere gradient of [`eggholder`]; undefined where either
/// absolute-value argument vanishes.
pub fn eggholder_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    eggholder_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`eggholder`] into `g`.
pub fn eggholder_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let u = x2 + x1 / 2.0 + 47.0;
    let v = x1 - x2 - 47.0;
    let ru = u.abs().sqrt();
    let rv = v.abs().sqrt();
    // d sin(sqrt(|u|))/du = cos(sqrt(|u|)) sign(u) / (2 sqrt(|u|))
    let du = ru.cos() * u.signum() / (2.0 * ru);
    let dv = rv.cos() * v.signum() / (2.0 * rv);
    g[0] = -(x2 + 47.0) * du * 0.5 - rv.sin() - x1 * dv;
    g[1] = -ru.sin() - (x2 + 47.0) * du + x1 * dv;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "eggholder",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Multimodal,
            Property::PartiallyDifferentiable,
        ]),
        |n| vec![(-512.0, 512.0); n],
        |_| vec![0.0, 0.0],
        |_| vec![512.0, 404.2319],
        |_| -959.6407,
    )?
    .with_tolerance(1e-3);
    Ok(TestFunction::new(
        eggholder,
        eggholder_grad,
        eggholder_grad_into,
        metadata,
    ))
}
