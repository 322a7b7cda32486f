//! Drop-Wave test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Drop-Wave function (2D) - concentric waves falling into a central well
/// Global minimum: f(x) = -1 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn drop_wave(x: &Array1<f64>) -> f64 {
    let s = x[0].powi(2) + x[1].powi(2);
    let r = s.sqrt();
    -(1.0 + (12.0 * r).cos()) / (0.5 * s + 2.0)
}

/// Analytic gradient of [`drop_wave`]. The surface is smooth at the origin
/// because the wave term is even in the radius.
pub fn drop_wave_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    drop_wave_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`drop_wave`] into `g`.
pub fn drop_wave_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let s = x[0].powi(2) + x[1].powi(2);
    let r = s.sqrt();
    let n = 1.0 + (12.0 * r).cos();
    let d = 0.5 * s + 2.0;
    // sin(12r)/r -> 12 as r -> 0
    let k = if r > 0.0 { 12.0 * (12.0 * r).sin() / r } else { 144.0 };
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        *gi = k * xi / d + n * xi / d.powi(2);
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "drop_wave",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-5.12, 5.12); n],
        |_| vec![4.0, 4.0],
        |_| vec![0.0, 0.0],
        |_| -1.0,
    )?;
    Ok(TestFunction::new(
        drop_wave,
        drop_wave_grad,
        drop_wave_grad_into,
        metadata,
    ))
}
