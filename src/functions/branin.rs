//! Branin test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

const A: f64 = 1.0;
const R: f64 = 6.0;
const S: f64 = 10.0;

fn b() -> f64 {
    5.1 / (4.0 * PI * PI)
}

fn c() -> f64 {
    5.0 / PI
}

fn t() -> f64 {
    1.0 / (8.0 * PI)
}

/// Branin (Branin-Hoo) function (2D) - three identical global minima
/// Global minimum: f(x) = 0.397887 at (-pi, 12.275), (pi, 2.275) and
/// (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let inner = x2 - b() * x1.powi(2) + c() * x1 - R;
    A * inner.powi(2) + S * (1.0 - t()) * x1.cos() + S
}

/// Analytic gradient of [`branin`].
pub fn branin_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    branin_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`branin`] into `g`.
pub fn branin_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let inner = x2 - b() * x1.powi(2) + c() * x1 - R;
    g[0] = 2.0 * A * inner * (-2.0 * b() * x1 + c()) - S * (1.0 - t()) * x1.sin();
    g[1] = 2.0 * A * inner;
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "branin",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |_| vec![(-5.0, 10.0), (0.0, 15.0)],
        |_| vec![2.5, 7.5],
        |_| vec![PI, 2.275],
        |_| 0.39788735772973816,
    )?
    .with_provenance("Branin (1972)");
    Ok(TestFunction::new(branin, branin_grad, branin_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_branin_three_minima() {
        let expected = 0.39788735772973816;
        for m in [[-PI, 12.275], [PI, 2.275], [9.42478, 2.475]] {
            let x = Array1::from_vec(m.to_vec());
            assert_abs_diff_eq!(branin(&x), expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_branin_gradient_at_minimum() {
        let x = Array1::from_vec(vec![PI, 2.275]);
        let g = branin_grad(&x);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-10);
    }
}
