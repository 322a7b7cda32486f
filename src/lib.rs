#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod functions;
pub mod metadata;
pub mod properties;
pub mod registry;

pub use error::{BenchError, Result};
pub use metadata::{Arity, Metadata};
pub use properties::{Property, PropertySet};
pub use registry::{GradientFn, GradientIntoFn, Registry, TestFunction, ValueFn};
