//! Michalewicz test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Steepness parameter; larger values make the valleys narrower.
const M: i32 = 10;

/// Michalewicz function (2D registration) - steep parameterized valleys;
/// the optimum is only known numerically
/// Global minimum: f(x) = -1.8013 at x = (2.20, 1.57) for n = 2
/// Bounds: x_i in [0, pi]
pub fn michalewicz(x: &Array1<f64>) -> f64 {
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let t = (i as f64 + 1.0) * xi.powi(2) / PI;
            xi.sin() * t.sin().powi(2 * M)
        })
        .sum::<f64>()
}

/// Analytic gradient of [`michalewicz`].
pub fn michalewicz_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    michalewicz_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`michalewicz`] into `g`.
pub fn michalewicz_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (i, (gi, &xi)) in g.iter_mut().zip(x.iter()).enumerate() {
        let k = i as f64 + 1.0;
        let t = k * xi.powi(2) / PI;
        let st = t.sin();
        *gi = -(xi.cos() * st.powi(2 * M)
            + xi.sin()
                * (2 * M) as f64
                * st.powi(2 * M - 1)
                * t.cos()
                * (2.0 * k * xi / PI));
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "michalewicz",
        Arity::Fixed(2),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Differentiable,
            Property::Multimodal,
            Property::Separable,
        ]),
        |n| vec![(0.0, PI); n],
        |_| vec![0.5, 0.5],
        |_| vec![2.20, 1.57],
        |_| -1.8013,
    )?
    .with_tolerance(1e-3)
    .with_provenance("Michalewicz (1992)");
    Ok(TestFunction::new(
        michalewicz,
        michalewicz_grad,
        michalewicz_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_michalewicz_reference_minimum() {
        let x = Array1::from_vec(vec![2.20, 1.57]);
        assert_abs_diff_eq!(michalewicz(&x), -1.8013, epsilon = 1e-3);
    }

    #[test]
    fn test_michalewicz_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![1.1, 2.6]);
        let g = michalewicz_grad(&x);
        let h = 1e-7;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (michalewicz(&fwd) - michalewicz(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-4);
        }
    }
}
