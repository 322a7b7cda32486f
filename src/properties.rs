//! Closed vocabulary of descriptive tags for benchmark functions.
//!
//! The vocabulary is fixed at build time: adding a tag is a framework
//! change, never a per-function change, so independently contributed
//! functions cannot drift into ad-hoc classifications.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{BenchError, Result};

/// A classification tag from the literature.
///
/// The set is closed; `Property::ALL` enumerates every legal tag. String
/// forms exist for external callers (`tag`, `from_tag`), but catalogue
/// entries declare their properties with the enum directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    /// The search domain is a finite box.
    Bounded,
    /// Continuous over the whole domain.
    Continuous,
    /// The reference optimum is disputed or only numerically known.
    Controversial,
    /// Convex over the domain.
    Convex,
    /// Differentiable everywhere on the domain.
    Differentiable,
    /// Returns a finite value even for infinite input coordinates.
    FiniteAtInf,
    /// Evaluation includes a stochastic noise term.
    HasNoise,
    /// Multiple local minima.
    Multimodal,
    /// Differentiable except on a measure-zero set (kinks, ridges).
    PartiallyDifferentiable,
    /// Defined for any dimension above a minimum.
    Scalable,
    /// Decomposes into independent one-dimensional subproblems.
    Separable,
    /// A single local (hence global) minimum.
    Unimodal,
}

impl Property {
    /// Every legal tag, in canonical order.
    pub const ALL: [Property; 12] = [
        Property::Bounded,
        Property::Continuous,
        Property::Controversial,
        Property::Convex,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::HasNoise,
        Property::Multimodal,
        Property::PartiallyDifferentiable,
        Property::Scalable,
        Property::Separable,
        Property::Unimodal,
    ];

    /// Canonical string form of the tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Property::Bounded => "bounded",
            Property::Continuous => "continuous",
            Property::Controversial => "controversial",
            Property::Convex => "convex",
            Property::Differentiable => "differentiable",
            Property::FiniteAtInf => "finite_at_inf",
            Property::HasNoise => "has_noise",
            Property::Multimodal => "multimodal",
            Property::PartiallyDifferentiable => "partially_differentiable",
            Property::Scalable => "scalable",
            Property::Separable => "separable",
            Property::Unimodal => "unimodal",
        }
    }

    /// Parses a canonical tag string.
    pub fn from_tag(tag: &str) -> Result<Property> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.tag() == tag)
            .ok_or_else(|| BenchError::UnknownProperty {
                tags: vec![tag.to_string()],
            })
    }

    /// Returns `true` iff `tag` is a member of the vocabulary.
    pub fn is_valid(tag: &str) -> bool {
        Property::from_tag(tag).is_ok()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An ordered, duplicate-collapsing set of properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: BTreeSet<Property>,
}

impl PropertySet {
    /// Builds a set from typed properties. Duplicates collapse.
    pub fn new(properties: &[Property]) -> Self {
        Self {
            properties: properties.iter().copied().collect(),
        }
    }

    /// Builds a set from string tags, validating every tag against the
    /// vocabulary. All offending tags are reported together.
    pub fn from_tags(tags: &[&str]) -> Result<Self> {
        let mut properties = BTreeSet::new();
        let mut unknown = Vec::new();
        for tag in tags {
            match Property::from_tag(tag) {
                Ok(p) => {
                    properties.insert(p);
                }
                Err(_) => unknown.push(tag.to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(BenchError::UnknownProperty { tags: unknown });
        }
        Ok(Self { properties })
    }

    /// Membership test.
    pub fn has(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }

    /// Iterates the set in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Property> + '_ {
        self.properties.iter().copied()
    }

    /// Canonical tag strings, in canonical order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.properties.iter().map(|p| p.tag()).collect()
    }

    /// Number of distinct properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no property is declared.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_round_trip() {
        for property in Property::ALL {
            assert_eq!(Property::from_tag(property.tag()).unwrap(), property);
            assert!(Property::is_valid(property.tag()));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(!Property::is_valid("smooth"));
        assert!(Property::from_tag("smooth").is_err());
    }

    #[test]
    fn test_from_tags_collects_all_offenders() {
        let err = PropertySet::from_tags(&["separable", "spiky", "multimodal", "wavy"])
            .expect_err("invalid tags must be rejected");
        match err {
            BenchError::UnknownProperty { tags } => {
                assert_eq!(tags, vec!["spiky".to_string(), "wavy".to_string()]);
            }
            other => panic!("expected UnknownProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = PropertySet::new(&[
            Property::Multimodal,
            Property::Bounded,
            Property::Multimodal,
        ]);
        assert_eq!(set.len(), 2);
        assert!(set.has(Property::Multimodal));
        assert!(set.has(Property::Bounded));
        assert!(!set.has(Property::Convex));
    }

    #[test]
    fn test_canonical_order() {
        let set = PropertySet::from_tags(&["separable", "bounded", "multimodal"]).unwrap();
        assert_eq!(set.tags(), vec!["bounded", "multimodal", "separable"]);
    }
}
