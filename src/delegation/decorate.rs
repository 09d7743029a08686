//! Application surfaces
//!
//! Three interchangeable ways to install delegation accessors on a class:
//! - [`delegate`], taking the source and attribute names directly;
//! - [`delegator`], reading the class-level `delegate` value;
//! - [`crate::class::ClassBuilder::build_delegating`], running the same
//!   logic immediately after the class object is created.
//!
//! All of them funnel into [`decorate`].

use tracing::debug;

use crate::class::Class;
use crate::delegation::accessor::Delegated;
use crate::delegation::config::{resolve, DelegateSpec, ResolvedDelegation};
use crate::error::Result;

/// Resolve the delegation configuration for `class` and install one
/// accessor per resolved attribute name, silently replacing existing
/// members. This is where the class is actually modified.
pub fn decorate(class: &Class, explicit: Option<ResolvedDelegation>) -> Result<()> {
    let resolved = resolve(explicit, class)?;
    for attr in &resolved.attrs {
        class.install(Delegated::new(&resolved.source, attr));
    }
    debug!(
        class = %class.name(),
        source = %resolved.source,
        attrs = resolved.attrs.len(),
        "class decorated"
    );
    Ok(())
}

/// Apply the class's own `delegate` configuration value
pub fn delegator(class: &Class) -> Result<()> {
    decorate(class, None)
}

/// Argument-configured decorator.
///
/// `delegate("inner", &["value", "name"])` forwards `value` and `name`
/// through the owner's `inner` field. With an empty attribute list the
/// source is treated as a spaced string: `delegate("inner value name", &[])`
/// is equivalent.
pub fn delegate(source: &str, attrs: &[&str]) -> Delegate {
    let spec = if attrs.is_empty() {
        DelegateSpec::spaced(source)
    } else {
        DelegateSpec::list(source, attrs.iter().copied())
    };
    Delegate { spec }
}

/// A pending argument-configured decoration, applied with [`Delegate::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    spec: DelegateSpec,
}

impl Delegate {
    /// Decorate `class` with the configured (source, attrs) pair
    pub fn apply(&self, class: &Class) -> Result<()> {
        decorate(class, Some(self.spec.normalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DelegationError;
    use crate::object::{Object, Value};

    fn make_decorated(source_field: &str) -> (Class, Object) {
        let class = Class::builder("Wrapper").build();
        delegate(source_field, &["value"]).apply(&class).unwrap();

        let inner = Object::new();
        inner.set_attr("value", 5i64);
        (class, inner)
    }

    #[test]
    fn test_delegate_with_explicit_args() {
        let (class, inner) = make_decorated("inner");
        let instance = class.instantiate();
        instance.set_attr("inner", inner).unwrap();

        assert_eq!(instance.get_attr("value").unwrap(), Value::Int(5));
    }

    #[test]
    fn test_delegate_with_spaced_string_only() {
        let class = Class::builder("Wrapper").build();
        delegate("inner value name", &[]).apply(&class).unwrap();

        assert!(class.accessor("value").is_some());
        assert!(class.accessor("name").is_some());
        assert_eq!(class.accessor("value").unwrap().source(), "inner");
    }

    #[test]
    fn test_delegate_empty_attrs_without_class_config() {
        let class = Class::builder("Wrapper").build();
        let result = delegate("inner", &[]).apply(&class);

        assert!(matches!(
            result,
            Err(DelegationError::Configuration { .. })
        ));
        assert!(class.member_names().is_empty());
    }

    #[test]
    fn test_delegate_overrides_class_config() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::spaced("b y"))
            .build();
        delegate("a", &["x"]).apply(&class).unwrap();

        let accessor = class.accessor("x").unwrap();
        assert_eq!(accessor.source(), "a");
        assert!(class.accessor("y").is_none());
    }

    #[test]
    fn test_delegator_reads_spaced_config() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::spaced("inner value"))
            .build();
        delegator(&class).unwrap();

        assert_eq!(class.accessor("value").unwrap().source(), "inner");
    }

    #[test]
    fn test_delegator_reads_list_config() {
        let class = Class::builder("Wrapper")
            .delegate(DelegateSpec::list("inner", ["value", "name"]))
            .build();
        delegator(&class).unwrap();

        assert!(class.accessor("value").is_some());
        assert!(class.accessor("name").is_some());
    }

    #[test]
    fn test_delegator_without_config() {
        let class = Class::builder("Wrapper").build();
        assert!(matches!(
            delegator(&class),
            Err(DelegationError::Configuration { .. })
        ));
    }

    #[test]
    fn test_all_surfaces_install_equivalent_accessors() {
        let explicit = Class::builder("A").build();
        delegate("inner", &["value"]).apply(&explicit).unwrap();

        let configured = Class::builder("B")
            .delegate(DelegateSpec::list("inner", ["value"]))
            .build();
        delegator(&configured).unwrap();

        let hooked = Class::builder("C")
            .delegate(DelegateSpec::spaced("inner value"))
            .build_delegating()
            .unwrap();

        for class in [&explicit, &configured, &hooked] {
            let accessor = class.accessor("value").unwrap();
            assert_eq!(accessor.source(), "inner");
            assert_eq!(accessor.attr(), "value");
        }
    }

    #[test]
    fn test_decorate_installs_nothing_on_error() {
        let class = Class::builder("Wrapper").build();
        let explicit = ResolvedDelegation::new("inner", Vec::<String>::new());

        assert!(decorate(&class, Some(explicit)).is_err());
        assert!(class.member_names().is_empty());
    }
}
