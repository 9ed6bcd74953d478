//! Type compatibility for reified types and runtime values.
//!
//! This crate re-exports the workspace's public surface:
//!
//! - [`common`]: the shared error type and limits
//! - [`types`]: type descriptors, runtime values and proxies
//! - [`solver`]: assignability, classification, cursor indexing, identity
//!
//! The most common entry points are also re-exported at the root.

pub use typecompat_common as common;
pub use typecompat_solver as solver;
pub use typecompat_types as types;

pub use typecompat_common::{Error, Result};
pub use typecompat_solver::{
    AssignabilityChecker, AssignabilityVerdict, ExhaustionCheck, IndexingPolicy,
    NoopProxyIntrospector, ProxyIntrospector, RemotingIntrospector, SimplePropertyKind,
    element_at, element_at_source, element_at_with_policy, explain_assignability, first_element,
    first_element_of_source, identity_hex_string, identity_to_string, is_assignable,
    is_assignable_and_not_transparent_proxy, is_empty, is_instantiable, is_primitive_array,
    is_simple_property, null_safe_equals, qualified_method_name,
};
pub use typecompat_types::{
    BoxedValue, ClassFlags, Instance, MethodDescriptor, PrimitiveKind, ProxyBinding,
    RemotingTypeInfo, RuntimeObject, TransparentProxy, TypeDescriptor,
};

// Opt-in `tracing` subscriber setup
pub mod tracing_config;
pub use tracing_config::init_tracing;
