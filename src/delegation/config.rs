//! Delegation configuration
//!
//! The class-level `delegate` value comes in two shapes: an explicit
//! source-plus-attribute-list, or a single space-separated string. Both
//! normalize to the same [`ResolvedDelegation`] pair.

use serde::{Deserialize, Serialize};

use crate::class::Class;
use crate::error::{DelegationError, Result};

/// A class-level delegation configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DelegateSpec {
    /// Source name and attribute names given separately
    List { source: String, attrs: Vec<String> },
    /// Space-separated string, first token the source name
    Spaced(String),
}

impl DelegateSpec {
    /// Build the list form
    pub fn list(
        source: impl Into<String>,
        attrs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        DelegateSpec::List {
            source: source.into(),
            attrs: attrs.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the spaced-string form
    pub fn spaced(spec: impl Into<String>) -> Self {
        DelegateSpec::Spaced(spec.into())
    }

    /// Normalize either shape into a (source, attrs) pair.
    ///
    /// The pair is not validated here; [`resolve`] rejects empty parts.
    pub fn normalize(&self) -> ResolvedDelegation {
        match self {
            DelegateSpec::List { source, attrs } => ResolvedDelegation {
                source: source.clone(),
                attrs: attrs.clone(),
            },
            DelegateSpec::Spaced(spec) => {
                let mut tokens = spec.split_whitespace().map(String::from);
                let source = tokens.next().unwrap_or_default();
                ResolvedDelegation {
                    source,
                    attrs: tokens.collect(),
                }
            }
        }
    }
}

impl From<&str> for DelegateSpec {
    fn from(spec: &str) -> Self {
        DelegateSpec::Spaced(spec.to_string())
    }
}

impl From<String> for DelegateSpec {
    fn from(spec: String) -> Self {
        DelegateSpec::Spaced(spec)
    }
}

impl From<(&str, &[&str])> for DelegateSpec {
    fn from((source, attrs): (&str, &[&str])) -> Self {
        DelegateSpec::list(source, attrs.iter().copied())
    }
}

/// A normalized (source name, attribute names) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDelegation {
    /// Name of the owner field holding the delegate target
    pub source: String,
    /// Attribute names to forward
    pub attrs: Vec<String>,
}

impl ResolvedDelegation {
    pub fn new(
        source: impl Into<String>,
        attrs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            source: source.into(),
            attrs: attrs.into_iter().map(Into::into).collect(),
        }
    }

    /// Both the source name and the attribute list must be non-empty
    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.attrs.is_empty()
    }
}

/// Establish the (source, attrs) pair for a class.
///
/// Explicit arguments win when complete; otherwise the class-level
/// `delegate` value is consulted. Failing both, a `Configuration` error
/// carries whatever values were attempted.
pub fn resolve(explicit: Option<ResolvedDelegation>, class: &Class) -> Result<ResolvedDelegation> {
    if let Some(resolved) = &explicit {
        if resolved.is_complete() {
            return Ok(resolved.clone());
        }
    }

    if let Some(spec) = class.delegate_spec() {
        let resolved = spec.normalize();
        if resolved.is_complete() {
            return Ok(resolved);
        }
        return Err(DelegationError::Configuration {
            src: Some(resolved.source),
            attrs: resolved.attrs,
        });
    }

    let attempted = explicit.unwrap_or_else(|| ResolvedDelegation::new("", Vec::<String>::new()));
    Err(DelegationError::Configuration {
        src: (!attempted.source.is_empty()).then(|| attempted.source.clone()),
        attrs: attempted.attrs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list_form() {
        let spec = DelegateSpec::list("inner", ["value", "name"]);
        let resolved = spec.normalize();
        assert_eq!(resolved.source, "inner");
        assert_eq!(resolved.attrs, vec!["value", "name"]);
    }

    #[test]
    fn test_normalize_spaced_form() {
        let spec = DelegateSpec::spaced("inner value name");
        let resolved = spec.normalize();
        assert_eq!(resolved.source, "inner");
        assert_eq!(resolved.attrs, vec!["value", "name"]);
    }

    #[test]
    fn test_normalize_spaced_extra_whitespace() {
        let spec = DelegateSpec::spaced("  inner   value\tname ");
        let resolved = spec.normalize();
        assert_eq!(resolved.source, "inner");
        assert_eq!(resolved.attrs, vec!["value", "name"]);
    }

    #[test]
    fn test_normalize_spaced_source_only() {
        let resolved = DelegateSpec::spaced("inner").normalize();
        assert_eq!(resolved.source, "inner");
        assert!(resolved.attrs.is_empty());
        assert!(!resolved.is_complete());
    }

    #[test]
    fn test_both_forms_normalize_identically() {
        let list = DelegateSpec::list("inner", ["value"]).normalize();
        let spaced = DelegateSpec::spaced("inner value").normalize();
        assert_eq!(list, spaced);
    }

    #[test]
    fn test_resolve_explicit_wins() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::spaced("b y"))
            .build();
        let explicit = ResolvedDelegation::new("a", ["x"]);

        let resolved = resolve(Some(explicit), &class).unwrap();
        assert_eq!(resolved.source, "a");
        assert_eq!(resolved.attrs, vec!["x"]);
    }

    #[test]
    fn test_resolve_falls_back_to_class_field() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::spaced("inner value"))
            .build();

        let resolved = resolve(None, &class).unwrap();
        assert_eq!(resolved.source, "inner");
        assert_eq!(resolved.attrs, vec!["value"]);
    }

    #[test]
    fn test_resolve_incomplete_explicit_falls_back() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::list("inner", ["value"]))
            .build();
        let explicit = ResolvedDelegation::new("a", Vec::<String>::new());

        let resolved = resolve(Some(explicit), &class).unwrap();
        assert_eq!(resolved.source, "inner");
    }

    #[test]
    fn test_resolve_nothing_configured() {
        let class = Class::builder("Wrapper").build();
        let err = resolve(None, &class).unwrap_err();
        assert_eq!(
            err,
            DelegationError::Configuration {
                src: None,
                attrs: vec![],
            }
        );
    }

    #[test]
    fn test_resolve_incomplete_class_field() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::spaced("inner"))
            .build();
        let err = resolve(None, &class).unwrap_err();
        assert_eq!(
            err,
            DelegationError::Configuration {
                src: Some("inner".to_string()),
                attrs: vec![],
            }
        );
    }

    #[test]
    fn test_spec_from_str() {
        let spec: DelegateSpec = "inner value".into();
        assert_eq!(spec, DelegateSpec::spaced("inner value"));
    }

    #[test]
    fn test_spec_deserializes_from_string_or_map() {
        let spaced: DelegateSpec = serde_json::from_str("\"inner value\"").unwrap();
        assert_eq!(spaced, DelegateSpec::spaced("inner value"));

        let list: DelegateSpec =
            serde_json::from_str(r#"{"source": "inner", "attrs": ["value"]}"#).unwrap();
        assert_eq!(list, DelegateSpec::list("inner", ["value"]));
    }
}
