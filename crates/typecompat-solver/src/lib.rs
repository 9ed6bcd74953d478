//! Type compatibility queries.
//!
//! Pure, synchronous predicates over [`typecompat_types`] descriptors and
//! runtime values:
//!
//! - **Assignability**: can a value be treated as an instance of a target
//!   type, with transparent-proxy unwrapping and boxed-primitive widening
//! - **Classification**: simple property types and primitive arrays
//! - **Cursor indexing**: the k-th element of a single-pass iterator
//! - **Identity**: identity hashes and `Type@hash` strings
mod assignability;
pub mod cursor;
pub mod identity;
mod proxy_introspection;
pub mod relation;
mod type_classifier;
pub mod utils;

pub use assignability::{
    AssignabilityChecker, AssignabilityVerdict, explain_assignability, is_assignable,
    is_assignable_and_not_transparent_proxy,
};
pub use cursor::{
    ExhaustionCheck, IndexingPolicy, element_at, element_at_source, element_at_with_policy,
    first_element, first_element_of_source,
};
pub use identity::{identity_hash, identity_hex_string, identity_to_string};
pub use proxy_introspection::{NoopProxyIntrospector, ProxyIntrospector, RemotingIntrospector};
pub use relation::{is_instance_of_type, is_subtype_of};
pub use type_classifier::{
    SimplePropertyKind, classify_simple_property, is_instantiable, is_primitive_array,
    is_simple_property, primitive_array_kind,
};
pub use utils::{is_empty, null_safe_equals, qualified_method_name};

#[cfg(test)]
#[path = "../tests/test_support.rs"]
mod test_support;
