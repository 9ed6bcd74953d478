//! Reified type model for typecompat.
//!
//! Types are described by immutable, cheaply clonable [`TypeDescriptor`]s
//! built from a closed set of variants rather than discovered by reflection:
//!
//! - **Primitives**: the nine [`PrimitiveKind`]s and their boxed wrappers
//! - **Well-known references**: the root `Object`, `String`, and the
//!   descriptor type itself
//! - **Arrays** of any descriptor
//! - **Classes and interfaces** with base chains and implemented interfaces
//!
//! Runtime values implement [`RuntimeObject`]. A value that stands in for a
//! remote object carries a [`ProxyBinding`].

mod method;
mod primitive;
mod proxy;
mod runtime;
mod types;

pub use method::MethodDescriptor;
pub use primitive::{BOXING_TABLE, PRIMITIVE_ARRAY_KINDS, PrimitiveKind};
pub use proxy::{ProxyBinding, RemotingTypeInfo, TRANSPARENT_PROXY_TYPE_NAME, TransparentProxy};
pub use runtime::{BoxedValue, Instance, RuntimeObject};
pub use types::{
    ClassBuilder, ClassFlags, ClassShape, InterfaceShape, OBJECT_TYPE_NAME, STRING_TYPE_NAME,
    TYPE_DESCRIPTOR_TYPE_NAME, TypeData, TypeDescriptor,
};

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod types_tests;
#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod runtime_tests;
