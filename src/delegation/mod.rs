//! Attribute delegation
//!
//! This module holds the forwarding accessor, the configuration shapes it
//! is declared with, and the decoration surfaces that install accessors
//! onto a class.

pub mod accessor;
pub mod config;
pub mod decorate;

pub use accessor::Delegated;
pub use config::{resolve, DelegateSpec, ResolvedDelegation};
pub use decorate::{decorate, delegate, delegator, Delegate};
