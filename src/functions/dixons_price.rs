//! Dixon's Price test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Dixon-Price function - a curved valley with a recursive minimizer
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^(i+1) - 2) / 2^(i+1))
/// Bounds: x_i in [-10, 10]
pub fn dixons_price(x: &Array1<f64>) -> f64 {
    let first = (x[0] - 1.0).powi(2);
    let rest: f64 = (1..x.len())
        .map(|i| (i + 1) as f64 * (2.0 * x[i].powi(2) - x[i - 1]).powi(2))
        .sum();
    first + rest
}

/// Analytic gradient of [`dixons_price`].
pub fn dixons_price_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    dixons_price_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`dixons_price`] into `g`.
pub fn dixons_price_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    g.fill(0.0);
    g[0] = 2.0 * (x[0] - 1.0);
    for i in 1..x.len() {
        let c = (i + 1) as f64;
        let t = 2.0 * x[i].powi(2) - x[i - 1];
        g[i] += 8.0 * c * x[i] * t;
        g[i - 1] += -2.0 * c * t;
    }
}

fn minimizer(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let p = 2f64.powi(i as i32 + 1);
            2f64.powf(-(p - 2.0) / p)
        })
        .collect()
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "dixons_price",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Scalable,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |n| vec![-2.0; n],
        minimizer,
        |_| 0.0,
    )?
    .with_provenance("Dixon & Price (1989)");
    Ok(TestFunction::new(
        dixons_price,
        dixons_price_grad,
        dixons_price_grad_into,
        metadata,
    ))
}
