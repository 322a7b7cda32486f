//! Hartman 3D test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

const A: [[f64; 3]; 4] = [
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
];
const C: [f64; 4] = [1.0, 1.2, 3.0, 3.2];
const P: [[f64; 3]; 4] = [
    [0.3689, 0.1170, 0.2673],
    [0.4699, 0.4387, 0.7470],
    [0.1091, 0.8732, 0.5547],
    [0.03815, 0.5743, 0.8828],
];

/// Hartmann 3-D function - four Gaussian-like wells
/// Global minimum: f(x) = -3.86278 at x = (0.114614, 0.555649, 0.852547)
/// Bounds: x_i in [0, 1]
pub fn hartman_3d(x: &Array1<f64>) -> f64 {
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

/// Analytic gradient of [`hartman_3d`].
pub fn hartman_3d_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    hartman_3d_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`hartman_3d`] into `g`.
pub fn hartman_3d_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    g.fill(0.0);
    for (i, &ci) in C.iter().enumerate() {
        let inner: f64 = A[i]
            .iter()
            .zip(P[i].iter())
            .enumerate()
            .map(|(j, (&aij, &pij))| aij * (x[j] - pij).powi(2))
            .sum();
        let e = ci * (-inner).exp();
        for j in 0..3 {
            g[j] += 2.0 * e * A[i][j] * (x[j] - P[i][j]);
        }
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "hartman_3d",
        Arity::Fixed(3),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(0.0, 1.0); n],
        |_| vec![0.9, 0.1, 0.2],
        |_| vec![0.114614, 0.555649, 0.852547],
        |_| -3.86278,
    )?
    .with_tolerance(1e-4)
    .with_provenance("Hartman (1973)");
    Ok(TestFunction::new(
        hartman_3d,
        hartman_3d_grad,
        hartman_3d_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hartman_3d_reference_minimum() {
        let x = Array1::from_vec(vec![0.114614, 0.555649, 0.852547]);
        assert_abs_diff_eq!(hartman_3d(&x), -3.86278, epsilon = 1e-4);
    }

    #[test]
    fn test_hartman_3d_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![0.3, 0.6, 0.4]);
        let g = hartman_3d_grad(&x);
        let h = 1e-6;
        for j in 0..3 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (hartman_3d(&fwd) - hartman_3d(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-5);
        }
    }
}
