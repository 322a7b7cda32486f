//! Salomon test function

use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Salomon function - concentric ripples around the origin
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn salomon(x: &Array1<f64>) -> f64 {
    let r = x.iter().map(|&xi| xi.powi(2)).sum::<f64>().sqrt();
    1.0 - (2.0 * PI * r).cos() + 0.1 * r
}

/// Almost-everywhere gradient of [`salomon`]; the radial cusp at the origin
/// is returned as zero.
pub fn salomon_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    salomon_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`salomon`] into `g`.
pub fn salomon_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let r = x.iter().map(|&xi| xi.powi(2)).sum::<f64>().sqrt();
    if r > 0.0 {
        let radial = (2.0 * PI * (2.0 * PI * r).sin() + 0.1) / r;
        for (gi, &xi) in g.iter_mut().zip(x.iter()) {
            *gi = radial * xi;
        }
    } else {
        g.fill(0.0);
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "salomon",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Multimodal,
            Property::PartiallyDifferentiable,
            Property::Scalable,
        ]),
        |n| vec![(-100.0, 100.0); n],
        |n| vec![60.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?
    .with_provenance("Salomon (1996)");
    Ok(TestFunction::new(salomon, salomon_grad, salomon_grad_into, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_salomon_minimum() {
        let zero = Array1::zeros(2);
        assert_abs_diff_eq!(salomon(&zero), 0.0);
    }

    #[test]
    fn test_salomon_on_unit_circle() {
        // r = 1: 1 - cos(2 pi) + 0.1
        let x = Array1::from_vec(vec![1.0, 0.0]);
        assert_abs_diff_eq!(salomon(&x), 0.1, epsilon = 1e-12);
    }
}
