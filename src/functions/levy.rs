//! Levy test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

fn warp(xi: f64) -> f64 {
    1.0 + (xi - 1.0) / 4.0
}

/// Levy function - multimodal (generalized n-dimensional version)
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-10, 10]
pub fn levy(x: &Array1<f64>) -> f64 {
    let w: Vec<f64> = x.iter().map(|&xi| warp(xi)).collect();
    let n = w.len();

    let first = (PI * w[0]).sin().powi(2);
    let middle: f64 = w
        .iter()
        .take(n - 1)
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let wn = w[n - 1];
    let last = (wn - 1.0).powi(2) * (1.0 + (2.0 * PI * wn).sin().powi(2));

    first + middle + last
}

/// Analytic gradient of [`levy`].
pub fn levy_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    levy_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`levy`] into `g`. Each coordinate enters through
/// w = 1 + (x - 1)/4, hence the overall 1/4 factor.
pub fn levy_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len();
    for i in 0..n {
        let wi = warp(x[i]);
        let mut d = 0.0;
        if i == 0 {
            d += PI * (2.0 * PI * wi).sin();
        }
        if i < n - 1 {
            let s = (PI * wi + 1.0).sin();
            d += 2.0 * (wi - 1.0) * (1.0 + 10.0 * s.powi(2))
                + 10.0 * PI * (wi - 1.0).powi(2) * (2.0 * (PI * wi + 1.0)).sin();
        }
        if i == n - 1 {
            d += 2.0 * (wi - 1.0) * (1.0 + (2.0 * PI * wi).sin().powi(2))
                + 2.0 * PI * (wi - 1.0).powi(2) * (4.0 * PI * wi).sin();
        }
        g[i] = 0.25 * d;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "levy",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |n| vec![-5.0; n],
        |n| vec![1.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(levy, levy_grad, levy_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_levy_minimum() {
        for n in [2, 3, 10] {
            let ones = Array1::from_elem(n, 1.0);
            assert_abs_diff_eq!(levy(&ones), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_levy_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![0.3, -2.4, 4.1]);
        let g = levy_grad(&x);
        let h = 1e-6;
        for j in 0..3 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (levy(&fwd) - levy(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-5);
        }
    }
}
