//! Sum Squares test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Sum Squares function - axis-weighted quadratic
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi * xi)
        .sum()
}

/// Analytic gradient of [`sum_squares`].
pub fn sum_squares_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    sum_squares_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`sum_squares`] into `g`.
pub fn sum_squares_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    for (i, (gi, &xi)) in g.iter_mut().zip(x.iter()).enumerate() {
        *gi = 2.0 * (i + 1) as f64 * xi;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "sum_squares",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Convex,
            Property::Differentiable,
            Property::Scalable,
            Property::Separable,
            Property::Unimodal,
        ]),
        |n| vec![(-10.0, 10.0); n],
        |n| vec![2.0; n],
        |n| vec![0.0; n],
        |_| 0.0,
    )?;
    Ok(TestFunction::new(
        sum_squares,
        sum_squares_grad,
        sum_squares_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_squares_values() {
        assert_eq!(sum_squares(&Array1::from_vec(vec![0.0, 0.0])), 0.0);
        // 1*4 + 2*9 = 22
        assert_eq!(sum_squares(&Array1::from_vec(vec![2.0, 3.0])), 22.0);
    }

    #[test]
    fn test_sum_squares_gradient() {
        let x = Array1::from_vec(vec![2.0, 3.0, -1.0]);
        let g = sum_squares_grad(&x);
        assert_eq!(g, Array1::from_vec(vec![4.0, 12.0, -6.0]));
    }
}
