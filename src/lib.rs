//! Attribute delegation for dynamic objects.
//!
//! An owner object holds a delegate target under a named source
//! attribute; selected attributes on the owner are transparently
//! forwarded to that target for reads, writes, and deletes. The
//! user-facing surfaces are interchangeable:
//!
//! - [`delegate`] — decorator taking the source and attribute names;
//! - [`delegator`] — decorator reading the class-level `delegate` value;
//! - [`ClassBuilder::build_delegating`] — applies the class-level value
//!   as part of constructing the class.
//!
//! ```
//! use delegator::{delegate, Class, Object, Value};
//!
//! let class = Class::builder("Wrapper").build();
//! delegate("inner", &["value"]).apply(&class).unwrap();
//!
//! let inner = Object::new();
//! inner.set_attr("value", 5i64);
//!
//! let wrapper = class.instantiate();
//! wrapper.set_attr("inner", inner).unwrap();
//! assert_eq!(wrapper.get_attr("value").unwrap(), Value::Int(5));
//! ```

pub mod class;
pub mod delegation;
pub mod error;
pub mod object;

pub use class::{Class, ClassBuilder, Instance};
pub use delegation::{decorate, delegate, delegator, Delegate, DelegateSpec, Delegated};
pub use error::{DelegationError, Result};
pub use object::{Object, Value};
