//! Classes, instances, and member tables
//!
//! Rust has no live attribute interception, so the delegation machinery
//! runs against a small class/instance layer: a [`Class`] carries a member
//! table of installed accessors, and [`Instance`] attribute access checks
//! that table before touching the instance's own attributes. Accessing a
//! member on the class itself yields the accessor object, which is the
//! type-level introspection hook.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::delegation::accessor::Delegated;
use crate::delegation::config::DelegateSpec;
use crate::delegation::decorate::delegator;
use crate::error::Result;
use crate::object::{Object, Value};

struct ClassInner {
    name: String,
    delegate: RwLock<Option<DelegateSpec>>,
    members: RwLock<HashMap<String, Delegated>>,
}

/// A type object: a name, an optional `delegate` configuration value, and
/// a member table of installed accessors. Cheap to clone; clones share
/// the member table.
#[derive(Clone)]
pub struct Class {
    inner: Arc<ClassInner>,
}

impl Class {
    /// Start declaring a class
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            delegate: None,
        }
    }

    /// The class name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The class-level `delegate` configuration value, if declared
    pub fn delegate_spec(&self) -> Option<DelegateSpec> {
        self.inner.delegate.read().clone()
    }

    /// Declare or replace the class-level `delegate` configuration value
    pub fn set_delegate_spec(&self, spec: impl Into<DelegateSpec>) {
        *self.inner.delegate.write() = Some(spec.into());
    }

    /// Install an accessor into the member table, silently replacing any
    /// prior member of the same name.
    pub fn install(&self, accessor: Delegated) {
        debug!(
            class = %self.inner.name,
            source = %accessor.source(),
            attr = %accessor.attr(),
            "installing delegation accessor"
        );
        let mut members = self.inner.members.write();
        members.insert(accessor.attr().to_string(), accessor);
    }

    /// Type-level member access: the installed accessor object itself
    pub fn accessor(&self, name: &str) -> Option<Delegated> {
        let members = self.inner.members.read();
        members.get(name).cloned()
    }

    /// Names of all installed accessors
    pub fn member_names(&self) -> Vec<String> {
        let members = self.inner.members.read();
        members.keys().cloned().collect()
    }

    /// Create an instance of this class with no attributes set
    pub fn instantiate(&self) -> Instance {
        Instance {
            class: self.clone(),
            attrs: Object::new(),
        }
    }
}

impl std::fmt::Debug for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.inner.name)
            .field("members", &self.member_names())
            .finish()
    }
}

/// Builder for declaring a class.
///
/// `build` constructs the bare class; `build_delegating` is the
/// construction hook, running the configuration-reading decorator
/// immediately after the class object is created.
pub struct ClassBuilder {
    name: String,
    delegate: Option<DelegateSpec>,
}

impl ClassBuilder {
    /// Declare the class-level `delegate` configuration value
    pub fn delegate(mut self, spec: impl Into<DelegateSpec>) -> Self {
        self.delegate = Some(spec.into());
        self
    }

    /// Construct the class without applying any delegation
    pub fn build(self) -> Class {
        Class {
            inner: Arc::new(ClassInner {
                name: self.name,
                delegate: RwLock::new(self.delegate),
                members: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Construct the class and immediately apply its `delegate`
    /// configuration, installing one accessor per attribute name.
    pub fn build_delegating(self) -> Result<Class> {
        let class = self.build();
        delegator(&class)?;
        Ok(class)
    }
}

/// An owner object: a class handle plus the instance's own attributes
#[derive(Debug, Clone)]
pub struct Instance {
    class: Class,
    attrs: Object,
}

impl Instance {
    /// The instance's class
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// The instance's own attribute bag, bypassing accessor dispatch
    pub fn attrs(&self) -> &Object {
        &self.attrs
    }

    /// Read an attribute, dispatching through any installed accessor
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        match self.class.accessor(name) {
            Some(accessor) => accessor.get(&self.attrs),
            None => self.attrs.get_attr(name),
        }
    }

    /// Write an attribute, dispatching through any installed accessor
    pub fn set_attr(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        match self.class.accessor(name) {
            Some(accessor) => accessor.set(&self.attrs, value),
            None => {
                self.attrs.set_attr(name, value);
                Ok(())
            }
        }
    }

    /// Remove an attribute, dispatching through any installed accessor
    pub fn del_attr(&self, name: &str) -> Result<()> {
        match self.class.accessor(name) {
            Some(accessor) => accessor.delete(&self.attrs),
            None => self.attrs.del_attr(name),
        }
    }
}
