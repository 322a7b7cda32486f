//! Rosenbrock test function

use ndarray::Array1;

use crate::error::Result;
use crate::metadata::{Arity, Metadata};
use crate::properties::{Property, PropertySet};
use crate::registry::TestFunction;

/// Rosenbrock banana function, generalized to n dimensions
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    (0..x.len() - 1)
        .map(|i| 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (1.0 - x[i]).powi(2))
        .sum()
}

/// Analytic gradient of [`rosenbrock`].
pub fn rosenbrock_grad(x: &Array1<f64>) -> Array1<f64> {
    let mut g = Array1::zeros(x.len());
    rosenbrock_grad_into(x, &mut g);
    g
}

/// Writes the gradient of [`rosenbrock`] into `g`.
pub fn rosenbrock_grad_into(x: &Array1<f64>, g: &mut Array1<f64>) {
    let n = x.len();
    g.fill(0.0);
    for i in 0..n - 1 {
        let t = x[i + 1] - x[i].powi(2);
        g[i] += -400.0 * x[i] * t - 2.0 * (1.0 - x[i]);
        g[i + 1] += 200.0 * t;
    }
}

pub(crate) fn descriptor() -> Result<TestFunction> {
    let metadata = Metadata::new(
        "rosenbrock",
        Arity::Scalable { min_dim: 2 },
        PropertySet::new(&[
            Property::Bounded,
            Property::Continuous,
            Property::Differentiable,
            Property::Scalable,
        ]),
        |n| vec![(-2.048, 2.048); n],
        // Classic alternating start, on the far side of the valley.
        |n| (0..n).map(|i| if i % 2 == 0 { -1.2 } else { 1.0 }).collect(),
        |n| vec![1.0; n],
        |_| 0.0,
    )?
    .with_provenance("Rosenbrock (1960)");
    Ok(TestFunction::new(
        rosenbrock,
        rosenbrock_grad,
        rosenbrock_grad_into,
        metadata,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rosenbrock_minimum() {
        for n in [2, 5, 10] {
            let ones = Array1::from_elem(n, 1.0);
            assert_abs_diff_eq!(rosenbrock(&ones), 0.0, epsilon = 1e-12);
            let g = rosenbrock_grad(&ones);
            for gi in g.iter() {
                assert_abs_diff_eq!(*gi, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rosenbrock_classic_start() {
        // f(-1.2, 1.0) = 100*(1 - 1.44)^2 + (1 + 1.2)^2 = 24.2
        let x = Array1::from_vec(vec![-1.2, 1.0]);
        assert_abs_diff_eq!(rosenbrock(&x), 24.2, epsilon = 1e-12);
    }
}
