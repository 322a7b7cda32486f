//! Hartman 6D test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

const A: [[f64; 6]; 4] = [
    [10.0, 3.0, 17.0, 3.5, 1.7, 8.0],
    [0.05, 10.0, 17.0, 0.1, 8.0, 14.0],
    [3.0, 3.5, 1.7, 10.0, 17.0, 8.0],
    [17.0, 8.0, 0.05, 10.0, 0.1, 14.0],
];
const C: [f64; 4] = [1.0, 1.2, 3.0, 3.2];
const P: [[f64; 6]; 4] = [
    [0.1312, 0.1696, 0.5569, 0.0124, 0.8283, 0.5886],
    [0.2329, 0.4135, 0.8307, 0.3736, 0.1004, 0.9991],
    [0.2348, 0.1451, 0.3522, 0.2883, 0.3047, 0.6650],
    [0.4047, 0.8828, 0.8732, 0.5743, 0.1091, 0.0381],
];

/// Hartmann 6-D function - four Gaussian-like wells in six dimensions
/// Global minimum: f(x) = -3.32237 at
/// x = (0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573)
/// Bounds: x_i in [0, 1]
pub fn hartman_6d(x: &Array1<f64>) -> f64 {
    -C.iter()
        .enumerate()
        .map(|(i, &ci)| {
            let inner: f64 = A[i]
                .iter()
                .zip(P[i].iter())
                .enumerate()
                .map(|(j, (&aij, &pij))| aij * (x[j] - pij).powi(2))
                .sum();
            ci * (-inner).exp()
        })
        .sum::<f64>()
}

/// Analytic gradient of [`hartman_6d`].
pub fn hartman_6d_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    hartman_6d_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`hartman_6d`] into `g`.
pub fn hartman_6d_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    g.fill(0.0);
    for (i, &ci) in C.iter().enumerate() {
        let inner: f64 = A[i]
            .iter()
            .zip(P[i].iter())
            .enumerate()
            .map(|(j, (&aij, &pij))| aij * (x[j] - pij).powi(2))
            .sum();
        let e = ci * (-inner).exp();
        for j in 0..6 {
            g[j] += 2.0 * e * A[i][j] * (x[j] - P[i][j]);
        }
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "hartman_6d",
        Arity::Fixed(6),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(0.0, 1.0); n],
        |_| vec![0.5; 6],
        |_| vec![0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573],
        |_| -3.32237,
    )?
    .with_tolerance(1e-4)
    .with_provenance("Hartman (1973)");
    Ok(TestFunction::new(
        hartman_6d,
        hartman_6d_grad,
        hartman_6d_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hartman_6d_reference_minimum() {
        let x = Array1::from_vec(vec![
            0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573,
        ]);
        assert_abs_diff_eq!(hartman_6d(&x), -3.32237, epsilon = 1e-4);
    }

    #[test]
    fn test_hartman_6d_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![0.2, 0.4, 0.6, 0.3, 0.5, 0.7]);
        let g = hartman_6d_grad(&x);
        let h = 1e-6;
        for j in 0..6 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (hartman_6d(&fwd) - hartman_6d(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-5);
        }
    }
}
