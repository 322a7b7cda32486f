//! Schaffer N.2 test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Schaffer N.2 function (2D) - ring-shaped ripples
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n2(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let u = x1.powi(2) - x2.powi(2);
    let d = 1.0 + 0.001 * (x1.powi(2) + x2.powi(2));
    0.5 + (u.sin().powi(2) - 0.5) / d.powi(2)
}

/// Analytic gradient of [`schaffer_n2`].
pub fn schaffer_n2_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    schaffer_n2_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`schaffer_n2`] into `g`.
pub fn schaffer_n2_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let u = x1.powi(2) - x2.powi(2);
    let d = 1.0 + 0.001 * (x1.powi(2) + x2.powi(2));
    let num = u.sin().powi(2) - 0.5;
    let osc = (2.0 * u).sin() / d.powi(2);
    let damp = 0.004 * num / d.powi(3);
    g[0] = 2.0 * x1 * osc - x1 * damp;
    g[1] = -2.0 * x2 * osc - x2 * damp;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "schaffer_n2",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(-100.0, 100.0); n],
        |_| vec![50.0, 50.0],
        |_| vec![0.0, 0.0],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        schaffer_n2,
        schaffer_n2_grad,
        schaffer_n2_grad_into,
        metadata,
    ))
}
