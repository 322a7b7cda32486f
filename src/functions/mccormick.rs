//! McCormick test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// McCormick function (2D)
/// Global minimum: f(x) = -1.913223 at x = (-0.547198, -1.547198),
/// where x1 + x2 = -2 pi / 3 and x1 - x2 = 1
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
pub fn mccormick(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + x2).sin() + (x1 - x2).powi(2) - 1.5 * x1 + 2.5 * x2 + 1.0
}

/// Analytic gradient of [`mccormick`].
pub fn mccormick_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    mccormick_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`mccormick`] into `g`.
pub fn mccormick_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let (x1, x2) = (x[0], x[1]);
    let c = (x1 + x2).cos();
    let d = 2.0 * (x1 - x2);
    g[0] = c + d - 1.5;
    g[1] = c - d + 2.5;
}

fn minimizer(_n: usize) -> Vec<f64> {
    let third_pi = std::f64::consts::PI / 3.0;
    vec![0.5 - third_pi, -0.5 - third_pi]
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "mccormick",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |_| vec![(-1.5, 4.0), (-3.0, 4.0)],
        |_| vec![2.5, 3.5],
        minimizer,
        |_| -1.9132229549810363,
    )?;
    Ok(TestFunction::new(
        mccormick,
        mccormick_grad,
        mccormick_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mccormick_minimum() {
        let x = Array1::from_vec(minimizer(2));
        assert_abs_diff_eq!(mccormick(&x), -1.9132229549810363, epsilon = 1e-12);
        let g = mccormick_grad(&x);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-12);
    }
}
