//! Test function records and the process-wide registry.
//!
//! A [`TestFunction`] binds a value evaluator, an analytic gradient (both
//! allocating and in-place forms) and a [`Metadata`] record. The [`Registry`]
//! maps names to records; it is populated once through the explicit
//! registration table in [`crate::functions::register_all`] and read-only
//! afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use ndarray::Array1;

use crate::error::{BenchError, Result};
use crate::functions;
use crate::metadata::Metadata;

/// Value evaluator: point -> real.
pub type ValueFn = fn(&Array1<f64>) -> f64;
/// Gradient evaluator: point -> vector of the same dimension.
pub type GradientFn = fn(&Array1<f64>) -> Array1<f64>;
/// In-place gradient evaluator: writes into a caller-supplied buffer.
pub type GradientIntoFn = fn(&Array1<f64>, &mut Array1<f64>);

/// One registered benchmark function.
///
/// The checked methods (`value`, `gradient`, `gradient_into`) enforce the
/// dimension contract uniformly, so individual formulas stay pure math. The
/// raw `fn` pointers are exposed for optimizer hot loops that validate once
/// up front.
#[derive(Debug)]
pub struct TestFunction {
    value_fn: ValueFn,
    gradient_fn: GradientFn,
    gradient_into_fn: GradientIntoFn,
    metadata: Metadata,
}

impl TestFunction {
    /// Binds evaluators to metadata. Records are immutable once built.
    pub fn new(
        value_fn: ValueFn,
        gradient_fn: GradientFn,
        gradient_into_fn: GradientIntoFn,
        metadata: Metadata,
    ) -> Self {
        Self {
            value_fn,
            gradient_fn,
            gradient_into_fn,
            metadata,
        }
    }

    /// Descriptive metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The function's unique name.
    pub fn name(&self) -> &'static str {
        self.metadata.name()
    }

    /// Evaluates the function at `x`.
    ///
    /// Fails with an argument error on an empty vector or a dimension the
    /// arity does not accept. NaN and infinite coordinates are not errors:
    /// they propagate through the formula.
    pub fn value(&self, x: &Array1<f64>) -> Result<f64> {
        self.metadata.validate_dim(x.len())?;
        Ok((self.value_fn)(x))
    }

    /// Evaluates the analytic gradient at `x`. Same dimension rules as
    /// [`TestFunction::value`]; the result has the input's length.
    pub fn gradient(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        self.metadata.validate_dim(x.len())?;
        Ok((self.gradient_fn)(x))
    }

    /// Evaluates the gradient into `out`. The buffer length must match the
    /// input length.
    pub fn gradient_into(&self, x: &Array1<f64>, out: &mut Array1<f64>) -> Result<()> {
        self.metadata.validate_dim(x.len())?;
        if out.len() != x.len() {
            return Err(BenchError::DimensionMismatch {
                name: self.metadata.name(),
                expected: x.len(),
                got: out.len(),
            });
        }
        (self.gradient_into_fn)(x, out);
        Ok(())
    }

    /// Raw value evaluator, without dimension checks.
    pub fn value_fn(&self) -> ValueFn {
        self.value_fn
    }

    /// Raw gradient evaluator, without dimension checks.
    pub fn gradient_fn(&self) -> GradientFn {
        self.gradient_fn
    }

    /// Raw in-place gradient evaluator, without dimension checks.
    pub fn gradient_into_fn(&self) -> GradientIntoFn {
        self.gradient_into_fn
    }
}

/// Name-keyed collection of benchmark functions.
///
/// Iteration order is the lexicographic name order, so batch validation and
/// reporting are deterministic.
pub struct Registry {
    functions: BTreeMap<&'static str, TestFunction>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Builds the full standard catalogue.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        functions::register_all(&mut registry)?;
        log::debug!("registered {} benchmark functions", registry.len());
        Ok(registry)
    }

    /// Process-wide read-only catalogue, built on first use.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| match Registry::standard() {
            Ok(registry) => registry,
            Err(e) => panic!("benchmark catalogue failed to initialize: {e}"),
        })
    }

    /// Registers a record under `name`.
    pub fn register(&mut self, name: &'static str, record: TestFunction) -> Result<()> {
        if record.metadata().name() != name {
            return Err(BenchError::NameMismatch {
                key: name.to_string(),
                name: record.metadata().name().to_string(),
            });
        }
        if self.functions.contains_key(name) {
            return Err(BenchError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.functions.insert(name, record);
        Ok(())
    }

    /// Looks a record up by name.
    pub fn lookup(&self, name: &str) -> Result<&TestFunction> {
        self.functions
            .get(name)
            .ok_or_else(|| BenchError::NotFound {
                name: name.to_string(),
            })
    }

    /// Like [`Registry::lookup`], as an `Option`.
    pub fn get(&self, name: &str) -> Option<&TestFunction> {
        self.functions.get(name)
    }

    /// Iterates every record in name order. Restartable; calling it twice
    /// without intervening registration yields the same sequence.
    pub fn all(&self) -> impl Iterator<Item = &TestFunction> {
        self.functions.values()
    }

    /// Every registered name, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.keys().copied().collect()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
