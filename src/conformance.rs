//! Catalogue-wide conformance checking.
//!
//! Mechanically verifies, for every registered record, the cross-cutting
//! invariants that individually contributed functions must satisfy: property
//! consistency, minimum consistency, bounds sanity, the evaluator edge-case
//! contract, and agreement between the analytic gradient and central finite
//! differences. The checker never aborts on the first failure; it
//! accumulates every violation across the registry in one pass.

use std::fmt;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::metadata::Arity;
use crate::properties::Property;
use crate::registry::{Registry, TestFunction};

/// Margin by which the start value must exceed the minimum value.
pub const START_MARGIN: f64 = 1e-3;

/// Infinity-norm tolerance for the gradient at a declared minimizer.
const GRAD_AT_MIN_TOL: f64 = 1e-5;

/// Sampled interior points per probe dimension for the finite-difference
/// cross-check.
const FD_SAMPLES: usize = 3;

/// Which rule of the battery a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Property-set consistency (tag exclusivity, tag/arity agreement).
    Properties,
    /// Metadata name equals the registry key.
    NameConsistency,
    /// f(min_position) matches min_value within tolerance.
    MinimumValue,
    /// f(start) exceeds min_value by a visible margin.
    StartAboveMinimum,
    /// lower <= upper; start and minimizer inside the box.
    BoundsSanity,
    /// Empty/NaN/Inf/tiny/wrong-dimension evaluator contract.
    EdgeCases,
    /// Analytic gradient agrees with finite differences; gradient vanishes
    /// at the minimizer where applicable.
    GradientCheck,
}

impl Rule {
    /// Short name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Properties => "properties",
            Rule::NameConsistency => "name-consistency",
            Rule::MinimumValue => "minimum-value",
            Rule::StartAboveMinimum => "start-above-minimum",
            Rule::BoundsSanity => "bounds-sanity",
            Rule::EdgeCases => "edge-cases",
            Rule::GradientCheck => "gradient-check",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed check: which record, which rule, and what went wrong.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Registry key of the offending record
    pub function: String,
    /// The rule that failed
    pub rule: Rule,
    /// Human-readable detail
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.function, self.rule, self.detail)
    }
}

/// Outcome of a registry-wide conformance pass.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    checked: usize,
    violations: Vec<Violation>,
}

impl ConformanceReport {
    /// Number of records checked.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Every accumulated violation, in registry order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when no record violated any rule.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "conformance: {} records checked, {} violations",
            self.checked,
            self.violations.len()
        )?;
        for violation in &self.violations {
            writeln!(f, "  {violation}")?;
        }
        Ok(())
    }
}

/// Runs the full battery over every registered record.
pub fn check_registry(registry: &Registry) -> ConformanceReport {
    let mut report = ConformanceReport::default();
    for record in registry.all() {
        let violations = check_function(record.name(), record);
        for violation in &violations {
            log::warn!("conformance violation: {violation}");
        }
        report.checked += 1;
        report.violations.extend(violations);
    }
    log::info!(
        "conformance: checked {} records, {} violations",
        report.checked,
        report.violations.len()
    );
    report
}

/// Applies the per-record battery; `key` is the registry key the record is
/// filed under.
pub fn check_function(key: &str, record: &TestFunction) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_properties(record, &mut violations);
    check_name(key, record, &mut violations);
    for n in probe_dims(record) {
        check_geometry(record, n, &mut violations);
    }
    check_edge_cases(record, &mut violations);
    check_gradient(record, &mut violations);
    violations
}

/// Probe dimensions: the fixed arity, or the scalable minimum plus a couple
/// of larger sizes.
fn probe_dims(record: &TestFunction) -> Vec<usize> {
    match record.metadata().arity() {
        Arity::Fixed(n) => vec![n],
        Arity::Scalable { min_dim } => {
            let mut dims = vec![min_dim];
            for n in [3, 10] {
                if n > min_dim {
                    dims.push(n);
                }
            }
            dims
        }
    }
}

fn push(violations: &mut Vec<Violation>, record: &TestFunction, rule: Rule, detail: String) {
    violations.push(Violation {
        function: record.name().to_string(),
        rule,
        detail,
    });
}

fn check_properties(record: &TestFunction, violations: &mut Vec<Violation>) {
    let meta = record.metadata();
    let props = meta.properties();

    let scalable_tag = props.has(Property::Scalable);
    if scalable_tag != meta.arity().is_scalable() {
        push(
            violations,
            record,
            Rule::Properties,
            format!(
                "scalable tag is {scalable_tag} but arity is {:?}",
                meta.arity()
            ),
        );
    }

    for (a, b) in [
        (Property::Differentiable, Property::PartiallyDifferentiable),
        (Property::Multimodal, Property::Unimodal),
    ] {
        if props.has(a) && props.has(b) {
            push(
                violations,
                record,
                Rule::Properties,
                format!("mutually exclusive tags declared: {a}, {b}"),
            );
        }
    }

    if let Ok(bounds) = meta.bounds(meta.default_dim()) {
        let finite = bounds.iter().all(|(lo, hi)| lo.is_finite() && hi.is_finite());
        if props.has(Property::Bounded) != finite {
            push(
                violations,
                record,
                Rule::Properties,
                format!(
                    "bounded tag is {} but bounds are {}finite",
                    props.has(Property::Bounded),
                    if finite { "" } else { "not " }
                ),
            );
        }
    }
}

fn check_name(key: &str, record: &TestFunction, violations: &mut Vec<Violation>) {
    if record.metadata().name() != key {
        push(
            violations,
            record,
            Rule::NameConsistency,
            format!(
                "registry key \"{key}\" != metadata name \"{}\"",
                record.metadata().name()
            ),
        );
    }
}

/// Bounds sanity, minimum consistency and start margin at one dimension.
fn check_geometry(record: &TestFunction, n: usize, violations: &mut Vec<Violation>) {
    let meta = record.metadata();
    let (bounds, start, min_position, min_value) = match (
        meta.bounds(n),
        meta.start(n),
        meta.min_position(n),
        meta.min_value(n),
    ) {
        (Ok(b), Ok(s), Ok(p), Ok(v)) => (b, s, p, v),
        _ => {
            push(
                violations,
                record,
                Rule::BoundsSanity,
                format!("metadata accessors failed for valid n = {n}"),
            );
            return;
        }
    };

    if bounds.len() != n || start.len() != n || min_position.len() != n {
        push(
            violations,
            record,
            Rule::BoundsSanity,
            format!(
                "generator shapes for n = {n}: bounds {}, start {}, min_position {}",
                bounds.len(),
                start.len(),
                min_position.len()
            ),
        );
        return;
    }

    for (i, &(lo, hi)) in bounds.iter().enumerate() {
        if !(lo <= hi) {
            push(
                violations,
                record,
                Rule::BoundsSanity,
                format!("lower > upper at index {i}: {lo} > {hi} (n = {n})"),
            );
        }
    }
    for (label, point) in [("start", &start), ("min_position", &min_position)] {
        for (i, (&xi, &(lo, hi))) in point.iter().zip(bounds.iter()).enumerate() {
            if !(lo <= xi && xi <= hi) {
                push(
                    violations,
                    record,
                    Rule::BoundsSanity,
                    format!("{label}[{i}] = {xi} outside [{lo}, {hi}] (n = {n})"),
                );
            }
        }
    }

    let at_min = match record.value(&Array1::from_vec(min_position)) {
        Ok(v) => v,
        Err(e) => {
            push(
                violations,
                record,
                Rule::MinimumValue,
                format!("evaluation at minimizer failed for n = {n}: {e}"),
            );
            return;
        }
    };
    let error = (at_min - min_value).abs();
    // Relative tolerance once the reference value dwarfs 1, matching how
    // the literature quotes large optima to fixed significant digits.
    let tolerance = meta.tolerance() * min_value.abs().max(1.0);
    if !(error <= tolerance) {
        push(
            violations,
            record,
            Rule::MinimumValue,
            format!(
                "f(min_position) = {at_min} vs declared {min_value} (error {error:.3e} > {tolerance:.3e}, n = {n})"
            ),
        );
    }

    match record.value(&Array1::from_vec(start)) {
        Ok(at_start) if at_start > min_value + START_MARGIN => {}
        Ok(at_start) => push(
            violations,
            record,
            Rule::StartAboveMinimum,
            format!("f(start) = {at_start} does not clear min_value {min_value} by {START_MARGIN} (n = {n})"),
        ),
        Err(e) => push(
            violations,
            record,
            Rule::StartAboveMinimum,
            format!("evaluation at start failed for n = {n}: {e}"),
        ),
    }
}

/// The uniform evaluator contract: empty input, wrong dimension, NaN, Inf
/// and tiny-magnitude behavior.
fn check_edge_cases(record: &TestFunction, violations: &mut Vec<Violation>) {
    let meta = record.metadata();
    let n = meta.default_dim();

    let empty = Array1::from_vec(vec![]);
    match record.value(&empty) {
        Err(e) if e.is_argument_error() => {}
        Err(e) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("empty input raised a non-argument error: {e}"),
        ),
        Ok(v) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("empty input evaluated to {v} instead of failing"),
        ),
    }

    let wrong_len = match meta.arity() {
        Arity::Fixed(k) => Some(k + 1),
        Arity::Scalable { min_dim } if min_dim > 1 => Some(min_dim - 1),
        Arity::Scalable { .. } => None,
    };
    if let Some(len) = wrong_len {
        let x = Array1::zeros(len);
        if !matches!(record.value(&x), Err(ref e) if e.is_argument_error()) {
            push(
                violations,
                record,
                Rule::EdgeCases,
                format!("dimension {len} was accepted"),
            );
        }
        if !matches!(record.gradient(&x), Err(ref e) if e.is_argument_error()) {
            push(
                violations,
                record,
                Rule::EdgeCases,
                format!("gradient accepted dimension {len}"),
            );
        }
    }

    // Start point is always a valid probe base.
    let base = match meta.start(n) {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut with_nan = base.clone();
    with_nan[0] = f64::NAN;
    match record.value(&Array1::from_vec(with_nan)) {
        Ok(v) if v.is_nan() => {}
        Ok(v) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("NaN coordinate produced {v} instead of NaN"),
        ),
        Err(e) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("NaN coordinate raised {e} instead of propagating"),
        ),
    }

    let mut with_inf = base.clone();
    with_inf[0] = f64::INFINITY;
    match record.value(&Array1::from_vec(with_inf)) {
        Ok(v) => {
            if meta.properties().has(Property::FiniteAtInf) && !v.is_finite() {
                push(
                    violations,
                    record,
                    Rule::EdgeCases,
                    format!("tagged finite_at_inf but infinite input produced {v}"),
                );
            }
        }
        Err(e) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("infinite coordinate raised {e} instead of propagating"),
        ),
    }

    let tiny = Array1::from_elem(n, 1e-308);
    match record.value(&tiny) {
        Ok(v) if v.is_finite() => {}
        Ok(v) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("1e-308 coordinates produced non-finite {v}"),
        ),
        Err(e) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("1e-308 coordinates raised {e}"),
        ),
    }

    match record.gradient(&Array1::from_vec(base.clone())) {
        Ok(g) if g.len() == n => {}
        Ok(g) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("gradient length {} for input length {n}", g.len()),
        ),
        Err(e) => push(
            violations,
            record,
            Rule::EdgeCases,
            format!("gradient at start failed: {e}"),
        ),
    }
    let mut short = Array1::zeros(n + 1);
    if record
        .gradient_into(&Array1::from_vec(base), &mut short)
        .is_ok()
    {
        push(
            violations,
            record,
            Rule::EdgeCases,
            "in-place gradient accepted a mismatched buffer".to_string(),
        );
    }
}

/// Gradient-at-minimizer and finite-difference cross-checks. Only records
/// tagged `differentiable` are checked; `controversial` records skip the
/// at-minimizer check because their minimizer literals are rounded.
fn check_gradient(record: &TestFunction, violations: &mut Vec<Violation>) {
    let meta = record.metadata();
    if !meta.properties().has(Property::Differentiable) {
        return;
    }

    for n in probe_dims(record) {
        if !meta.properties().has(Property::Controversial) {
            if let Ok(min_position) = meta.min_position(n) {
                let x = Array1::from_vec(min_position);
                match record.gradient(&x) {
                    Ok(g) => {
                        let norm = g.iter().fold(0.0f64, |acc, &gi| acc.max(gi.abs()));
                        if !(norm <= GRAD_AT_MIN_TOL) {
                            push(
                                violations,
                                record,
                                Rule::GradientCheck,
                                format!("|grad|_inf = {norm:.3e} at minimizer (n = {n})"),
                            );
                        }
                    }
                    Err(e) => push(
                        violations,
                        record,
                        Rule::GradientCheck,
                        format!("gradient at minimizer failed: {e}"),
                    ),
                }
            }
        }

        finite_difference_check(record, n, violations);
    }
}

/// Central finite differences at seeded-random interior points. Tolerance
/// scales with the step and with the local gradient magnitude, so steep
/// functions do not trip the check on truncation error.
fn finite_difference_check(record: &TestFunction, n: usize, violations: &mut Vec<Violation>) {
    let meta = record.metadata();
    let bounds = match meta.bounds(n) {
        Ok(b) => b,
        Err(_) => return,
    };

    let mut rng = StdRng::seed_from_u64(0x5eed ^ n as u64);
    for sample in 0..FD_SAMPLES {
        let point: Vec<f64> = bounds
            .iter()
            .map(|&(lo, hi)| {
                let (lo, hi) = if lo.is_finite() && hi.is_finite() {
                    (lo, hi)
                } else {
                    (-1.0, 1.0)
                };
                let u: f64 = rng.random_range(0.15..0.85);
                lo + u * (hi - lo)
            })
            .collect();
        let x = Array1::from_vec(point);

        let analytic = match record.gradient(&x) {
            Ok(g) => g,
            Err(e) => {
                push(
                    violations,
                    record,
                    Rule::GradientCheck,
                    format!("gradient failed at sample {sample} (n = {n}): {e}"),
                );
                return;
            }
        };

        for j in 0..n {
            let h = 1e-6 * (1.0 + x[j].abs());
            let mut forward = x.clone();
            forward[j] += h;
            let mut backward = x.clone();
            backward[j] -= h;
            let (fp, fm) = match (record.value(&forward), record.value(&backward)) {
                (Ok(fp), Ok(fm)) => (fp, fm),
                _ => continue,
            };
            let fd = (fp - fm) / (2.0 * h);
            let tolerance = 1e-3 * (1.0 + fd.abs().max(analytic[j].abs()));
            let error = (analytic[j] - fd).abs();
            if !(error <= tolerance) {
                push(
                    violations,
                    record,
                    Rule::GradientCheck,
                    format!(
                        "component {j}: analytic {:.6e} vs finite-difference {fd:.6e} at sample {sample} (n = {n})",
                        analytic[j]
                    ),
                );
                // One mismatching component is enough evidence per sample.
                break;
            }
        }
    }
}
