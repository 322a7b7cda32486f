//! Shekel test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

const A: [[f64; 4]; 10] = [
    [4.0, 4.0, 4.0, 4.0],
    [1.0, 1.0, 1.0, 1.0],
    [8.0, 8.0, 8.0, 8.0],
    [6.0, 6.0, 6.0, 6.0],
    [3.0, 7.0, 3.0, 7.0],
    [2.0, 9.0, 2.0, 9.0],
    [5.0, 5.0, 3.0, 3.0],
    [8.0, 1.0, 8.0, 1.0],
    [6.0, 2.0, 6.0, 2.0],
    [7.0, 3.6, 7.0, 3.6],
];
const C: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];

/// Shekel function (4D, m = 10 wells)
/// Global minimum: f(x) = -10.5364 near x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
pub fn shekel(x: &Array1<f64>) -> f64 {
    -A.iter()
        .zip(C.iter())
        .map(|(ai, &ci)| {
            let dist: f64 = ai
                .iter()
                .enumerate()
                .map(|(j, &aij)| (x[j] - aij).powi(2))
                .sum();
            1.0 / (dist + ci)
        })
        .sum::<f64>()
}

/// Analytic gradient of [`shekel`].
pub fn shekel_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    shekel_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`shekel`] into `g`.
pub fn shekel_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    g.fill(0.0);
    for (ai, &ci) in A.iter().zip(C.iter()) {
        let dist: f64 = ai
            .iter()
            .enumerate()
            .map(|(j, &aij)| (x[j] - aij).powi(2))
            .sum();
        let denom = (dist + ci).powi(2);
        for j in 0..4 {
            g[j] += 2.0 * (x[j] - ai[j]) / denom;
        }
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "shekel",
        Arity::Fixed(4),
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Differentiable,
            Property::Multimodal,
        ]),
        |n| vec![(0.0, 10.0); n],
        |_| vec![2.0; 4],
        |_| vec![4.0; 4],
        |_| -10.5364,
    )?
    .with_tolerance(1e-3)
    .with_provenance("Shekel (1971)");
    Ok(TestFunction::new(shekel, shekel_grad, shekel_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_shekel_reference_minimum() {
        let x = Array1::from_elem(4, 4.0);
        assert_abs_diff_eq!(shekel(&x), -10.5364, epsilon = 1e-3);
    }

    #[test]
    fn test_shekel_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![3.0, 5.0, 4.5, 6.0]);
        let g = shekel_grad(&x);
        let h = 1e-6;
        for j in 0..4 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (shekel(&fwd) - shekel(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-6);
        }
    }
}
