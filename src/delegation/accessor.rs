//! The per-attribute forwarding accessor
//!
//! Forwards reads, writes, and deletes of one attribute on the owner to
//! the object held in the owner's source attribute.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{DelegationError, Result};
use crate::object::{Object, Value};

/// Forwards a single named attribute from an owner to its delegate target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegated {
    source: String,
    attr: String,
}

impl Delegated {
    /// Create an accessor forwarding `attr` through the owner's `source` field
    pub fn new(source: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            attr: attr.into(),
        }
    }

    /// Name of the owner field holding the delegate target
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the forwarded attribute
    pub fn attr(&self) -> &str {
        &self.attr
    }

    /// Resolve the delegate target on the owner.
    ///
    /// Re-resolved on every access, so reassigning the owner's source
    /// field redirects delegation immediately.
    pub fn target(&self, owner: &Object) -> Result<Object> {
        let value = owner
            .try_get_attr(&self.source)
            .ok_or_else(|| DelegationError::SourceNotFound {
                src: self.source.clone(),
            })?;

        match value {
            Value::Object(target) => Ok(target),
            _ => Err(DelegationError::SourceNotObject {
                src: self.source.clone(),
            }),
        }
    }

    /// Read the forwarded attribute from the delegate target
    pub fn get(&self, owner: &Object) -> Result<Value> {
        trace!(source = %self.source, attr = %self.attr, "delegated get");
        self.target(owner)?.get_attr(&self.attr)
    }

    /// Write the forwarded attribute on the delegate target
    pub fn set(&self, owner: &Object, value: impl Into<Value>) -> Result<()> {
        trace!(source = %self.source, attr = %self.attr, "delegated set");
        self.target(owner)?.set_attr(self.attr.clone(), value);
        Ok(())
    }

    /// Remove the forwarded attribute from the delegate target
    pub fn delete(&self, owner: &Object) -> Result<()> {
        trace!(source = %self.source, attr = %self.attr, "delegated delete");
        self.target(owner)?.del_attr(&self.attr)
    }
}
