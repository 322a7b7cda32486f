//! Trid test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Trid function - convex quadratic with coupled neighbours
/// Global minimum: f(x) = -n(n+4)(n-1)/6 at x_i = (i+1)(n-i), i zero-based
/// Bounds: x_i in [-n^2, n^2]
pub fn trid(x: &Array1<f64>) -> f64 {
    let squares: f64 = x.iter().map(|&xi| (xi - 1.0).powi(2)).sum();
    let coupling: f64 = (1..x.len()).map(|i| x[i] * x[i - 1]).sum();
    squares - coupling
}

/// Analytic gradient of [`trid`].
pub fn trid_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    trid_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`trid`] into `g`.
pub fn trid_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len();
    for i in 0..n {
        let mut d = 2.0 * (x[i] - 1.0);
        if i > 0 {
            d -= x[i - 1];
        }
        if i < n - 1 {
            d -= x[i + 1];
        }
        g[i] = d;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "trid",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Unimodal,
        ]),
        |n| {
            let w = (n * n) as f64;
            vec![(-w, w); n]
        },
        |n| vec![0.0; n],
        |n| (0..n).map(|i| ((i + 1) * (n - i)) as f64).collect(),
        |n| {
            let n = n as f64;
            -n * (n + 4.0) * (n - 1.0) / 6.0
        },
    )?;
    Ok(TestFunction::new(trid, trid_grad, trid_grad_into, metadata))
}
