//! Dynamic object model
//!
//! Owners and delegate targets are name-keyed attribute maps behind a
//! shared handle. Cloning an [`Object`] clones the handle, so two clones
//! observe each other's mutations — the aliasing that delegation relies on.

use parking_lot::RwLock;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DelegationError, Result};

/// A dynamically-typed attribute value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Object(Object),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Objects compare by identity, not contents
            (Value::Object(a), Value::Object(b)) => a.same_object(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

/// A shared, mutable bag of named attributes
#[derive(Debug, Clone, Default)]
pub struct Object {
    attrs: Arc<RwLock<HashMap<String, Value>>>,
}

impl Object {
    /// Create a new empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute by name
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        let attrs = self.attrs.read();
        attrs
            .get(name)
            .cloned()
            .ok_or_else(|| DelegationError::AttributeNotFound {
                attr: name.to_string(),
            })
    }

    /// Read an attribute by name, `None` if absent
    pub fn try_get_attr(&self, name: &str) -> Option<Value> {
        let attrs = self.attrs.read();
        attrs.get(name).cloned()
    }

    /// Write an attribute, inserting or overwriting
    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<Value>) {
        let mut attrs = self.attrs.write();
        attrs.insert(name.into(), value.into());
    }

    /// Remove an attribute by name
    pub fn del_attr(&self, name: &str) -> Result<()> {
        let mut attrs = self.attrs.write();
        attrs
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DelegationError::AttributeNotFound {
                attr: name.to_string(),
            })
    }

    /// Check whether an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        let attrs = self.attrs.read();
        attrs.contains_key(name)
    }

    /// Names of all attributes currently set
    pub fn attr_names(&self) -> Vec<String> {
        let attrs = self.attrs.read();
        attrs.keys().cloned().collect()
    }

    /// Check whether two handles refer to the same object
    pub fn same_object(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.attrs, &other.attrs)
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let attrs = self.attrs.read();
        let mut map = serializer.serialize_map(Some(attrs.len()))?;
        for (name, value) in attrs.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = Object;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Object, A::Error> {
                let object = Object::new();
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    object.set_attr(name, value);
                }
                Ok(object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}
