//! Schwefel test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Offset making f vanish at the minimizer, to the precision the optimum
/// itself is known.
const OFFSET: f64 = 418.9828872724338;

/// Coordinate of the global minimizer in every dimension.
const MINIMIZER: f64 = 420.968746;

/// Schwefel function - deceptive: the best minima lie far from the second
/// best
/// Global minimum: f(x) ~ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    OFFSET * n
        - x.iter()
            .map(|&xi| xi * xi.abs().sqrt().sin())
            .sum::<f64>()
}

/// Analytic gradient of [`schwefel`].
pub fn schwefel_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    schwefel_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`schwefel`] into `g`.
///
/// d/dx [x sin(sqrt(|x|))] = sin(r) + (r/2) cos(r) with r = sqrt(|x|),
/// for either sign of x.
pub fn schwefel_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (gi, &xi) in g.iter_mut().zip(x.iter()) {
        let r = xi.abs().sqrt();
        *gi = -(r.sin() + 0.5 * r * r.cos());
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "schwefel",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Controversial,
            Property::Differentiable,
            Property::Multimodal,
            Property::Scalable,
            Property::Separable,
        ]),
        |n| vec![(-500.0, 500.0); n],
        |n| vec![300.0; n],
        |n| vec![MINIMIZER; n],
        |_| 0.0,
    )?
    .with_tolerance(1e-3)
    .with_provenance("Schwefel (1981)");
    Ok(TestFunction::new(
        schwefel,
        schwefel_grad,
        schwefel_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_schwefel_minimum() {
        for n in [2, 10] {
            let x = Array1::from_elem(n, MINIMIZER);
            assert_abs_diff_eq!(schwefel(&x), 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_schwefel_gradient_matches_finite_difference() {
        let x = Array1::from_vec(vec![123.4, -321.0]);
        let g = schwefel_grad(&x);
        let h = 1e-6;
        for j in 0..2 {
            let mut fwd = x.clone();
            fwd[j] += h;
            let mut bwd = x.clone();
            bwd[j] -= h;
            let fd = (schwefel(&fwd) - schwefel(&bwd)) / (2.0 * h);
            assert_abs_diff_eq!(g[j], fd, epsilon = 1e-5);
        }
    }
}
