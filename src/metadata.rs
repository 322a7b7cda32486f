//! Descriptive metadata for one benchmark function.
//!
//! Bounds, start point and minimum are generator functions of the dimension,
//! so a single record shape serves fixed-arity and scalable functions alike.

use crate::error::{BenchError, Result};
use crate::properties::PropertySet;

/// Dimensionality mode of a benchmark function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Defined for exactly this dimension.
    Fixed(usize),
    /// Defined for any dimension at or above `min_dim`.
    Scalable {
        /// Smallest accepted dimension
        min_dim: usize,
    },
}

impl Arity {
    /// The dimension used when a caller does not choose one: the fixed
    /// dimension, or the scalable minimum.
    pub fn default_dim(&self) -> usize {
        match *self {
            Arity::Fixed(n) => n,
            Arity::Scalable { min_dim } => min_dim,
        }
    }

    /// True for scalable functions.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Arity::Scalable { .. })
    }
}

/// Generator for per-dimension bounds: `(lower, upper)` pairs of length `n`.
pub type BoundsFn = fn(usize) -> Vec<(f64, f64)>;
/// Generator for a point of length `n`.
pub type PointFn = fn(usize) -> Vec<f64>;
/// Generator for a scalar depending on `n`.
pub type ScalarFn = fn(usize) -> f64;

/// Default tolerance for the minimum-consistency invariant.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Descriptive facts about one benchmark function.
///
/// Generators are plain `fn` pointers (non-capturing closures coerce), which
/// keeps records `Sync` and lets the whole catalogue live behind a process-
/// wide `OnceLock`.
#[derive(Debug, Clone)]
pub struct Metadata {
    name: &'static str,
    arity: Arity,
    properties: PropertySet,
    bounds: BoundsFn,
    start: PointFn,
    min_position: PointFn,
    min_value: ScalarFn,
    tolerance: f64,
    provenance: Option<&'static str>,
}

impl Metadata {
    /// Builds a record and fails fast on malformed generator shapes at the
    /// default dimension, so authoring mistakes surface at registration
    /// time rather than at first use.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &'static str,
        arity: Arity,
        properties: PropertySet,
        bounds: BoundsFn,
        start: PointFn,
        min_position: PointFn,
        min_value: ScalarFn,
    ) -> Result<Self> {
        let meta = Self {
            name,
            arity,
            properties,
            bounds,
            start,
            min_position,
            min_value,
            tolerance: DEFAULT_TOLERANCE,
            provenance: None,
        };
        let n = meta.arity.default_dim();
        for (label, len) in [
            ("bounds", (meta.bounds)(n).len()),
            ("start", (meta.start)(n).len()),
            ("min_position", (meta.min_position)(n).len()),
        ] {
            if len != n {
                log::debug!("{name}: {label} generator returned length {len} for n = {n}");
                return Err(BenchError::DimensionMismatch {
                    name,
                    expected: n,
                    got: len,
                });
            }
        }
        Ok(meta)
    }

    /// Overrides the minimum-consistency tolerance. Loose values (e.g. 1e-3)
    /// are for entries whose reference optimum is literature-rounded or
    /// ill-conditioned.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Attaches a literature source.
    pub fn with_provenance(mut self, provenance: &'static str) -> Self {
        self.provenance = Some(provenance);
        self
    }

    /// Unique identifier; matches the registry key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Dimensionality mode.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Declared classification tags.
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    /// Minimum-consistency tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Literature source, when recorded.
    pub fn provenance(&self) -> Option<&'static str> {
        self.provenance
    }

    /// The fixed dimension, or the scalable minimum.
    pub fn default_dim(&self) -> usize {
        self.arity.default_dim()
    }

    /// Validates a requested dimension against the arity.
    pub fn validate_dim(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(BenchError::EmptyInput { name: self.name });
        }
        match self.arity {
            Arity::Fixed(expected) if n != expected => Err(BenchError::DimensionMismatch {
                name: self.name,
                expected,
                got: n,
            }),
            Arity::Scalable { min_dim } if n < min_dim => Err(BenchError::DimensionTooSmall {
                name: self.name,
                min_dim,
                got: n,
            }),
            _ => Ok(()),
        }
    }

    /// `(lower, upper)` pairs for dimension `n`.
    pub fn bounds(&self, n: usize) -> Result<Vec<(f64, f64)>> {
        self.validate_dim(n)?;
        Ok((self.bounds)(n))
    }

    /// Canonical non-optimal initial guess for dimension `n`.
    pub fn start(&self, n: usize) -> Result<Vec<f64>> {
        self.validate_dim(n)?;
        Ok((self.start)(n))
    }

    /// A global minimizer for dimension `n` (one of several, for multimodal
    /// functions).
    pub fn min_position(&self, n: usize) -> Result<Vec<f64>> {
        self.validate_dim(n)?;
        Ok((self.min_position)(n))
    }

    /// Function value at the global minimizer for dimension `n`.
    pub fn min_value(&self, n: usize) -> Result<f64> {
        self.validate_dim(n)?;
        Ok((self.min_value)(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Property, PropertySet};

    fn sample_fixed() -> Metadata {
        Metadata::new(
            "sample",
            Arity::Fixed(2),
            PropertySet::new(&[Property::Bounded, Property::Unimodal]),
            |n| vec![(-5.0, 5.0); n],
            |n| vec![3.0; n],
            |n| vec![0.0; n],
            |_| 0.0,
        )
        .unwrap()
    }

    fn sample_scalable() -> Metadata {
        Metadata::new(
            "sample_nd",
            Arity::Scalable { min_dim: 2 },
            PropertySet::new(&[Property::Bounded, Property::Scalable]),
            |n| vec![(-5.0, 5.0); n],
            |n| vec![3.0; n],
            |n| vec![0.0; n],
            |_| 0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_dim_validation() {
        let meta = sample_fixed();
        assert!(meta.bounds(2).is_ok());
        assert!(matches!(
            meta.bounds(3),
            Err(BenchError::DimensionMismatch { expected: 2, got: 3, .. })
        ));
        assert!(matches!(meta.start(0), Err(BenchError::EmptyInput { .. })));
    }

    #[test]
    fn test_scalable_dim_validation() {
        let meta = sample_scalable();
        for n in [2, 3, 10, 100] {
            assert_eq!(meta.min_position(n).unwrap().len(), n);
            assert_eq!(meta.bounds(n).unwrap().len(), n);
        }
        assert!(matches!(
            meta.start(1),
            Err(BenchError::DimensionTooSmall { min_dim: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_bad_generator_shape_fails_fast() {
        let result = Metadata::new(
            "broken",
            Arity::Fixed(3),
            PropertySet::default(),
            |_| vec![(-1.0, 1.0); 2],
            |n| vec![0.5; n],
            |n| vec![0.0; n],
            |_| 0.0,
        );
        assert!(matches!(result, Err(BenchError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_default_dim() {
        assert_eq!(sample_fixed().default_dim(), 2);
        assert_eq!(sample_scalable().default_dim(), 2);
        assert!(sample_scalable().arity().is_scalable());
        assert!(!sample_fixed().arity().is_scalable());
    }
}
