//! Type descriptors.
//!
//! A [`TypeDescriptor`] is a shared handle to an immutable [`TypeData`].
//! Descriptors are built bottom-up (a class is built after its base and its
//! interfaces), so descriptor graphs are always acyclic.

use crate::primitive::PrimitiveKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Name of the root reference type.
pub const OBJECT_TYPE_NAME: &str = "Object";
/// Name of the string type.
pub const STRING_TYPE_NAME: &str = "String";
/// Name of the type-descriptor type itself.
pub const TYPE_DESCRIPTOR_TYPE_NAME: &str = "TypeDescriptor";

bitflags::bitflags! {
    /// Modifiers that affect whether a class can be instantiated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ClassFlags: u8 {
        const ABSTRACT = 1 << 0;
        const SEALED = 1 << 1;
        /// An open generic definition (unbound type parameters).
        const GENERIC_DEFINITION = 1 << 2;
    }
}

/// A nominal class: name, optional base class, implemented interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassShape {
    pub name: String,
    pub base: Option<TypeDescriptor>,
    pub interfaces: Vec<TypeDescriptor>,
    pub flags: ClassFlags,
}

/// A nominal interface and the interfaces it extends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceShape {
    pub name: String,
    pub extends: Vec<TypeDescriptor>,
}

/// The structure behind a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeData {
    /// Root of every reference type.
    Object,
    /// Unboxed primitive.
    Primitive(PrimitiveKind),
    /// Boxed wrapper of a primitive.
    Boxed(PrimitiveKind),
    String,
    /// The descriptor type itself (values of this type are descriptors).
    TypeDescriptor,
    /// Single-dimension array of the element type.
    Array(TypeDescriptor),
    Class(ClassShape),
    Interface(InterfaceShape),
}

/// Reified description of a type.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(Arc<TypeData>);

impl TypeDescriptor {
    pub fn new(data: TypeData) -> Self {
        Self(Arc::new(data))
    }

    pub fn object() -> Self {
        Self::new(TypeData::Object)
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(TypeData::Primitive(kind))
    }

    pub fn boxed(kind: PrimitiveKind) -> Self {
        Self::new(TypeData::Boxed(kind))
    }

    pub fn string() -> Self {
        Self::new(TypeData::String)
    }

    /// The type whose instances are type descriptors.
    pub fn type_descriptor() -> Self {
        Self::new(TypeData::TypeDescriptor)
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        Self::new(TypeData::Array(element))
    }

    /// Starts building a class descriptor.
    pub fn class(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn interface(
        name: impl Into<String>,
        extends: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        Self::new(TypeData::Interface(InterfaceShape {
            name: name.into(),
            extends: extends.into_iter().collect(),
        }))
    }

    #[inline]
    pub fn data(&self) -> &TypeData {
        &self.0
    }

    /// Identity of the underlying allocation. Equal descriptors built
    /// separately have different identities.
    #[inline]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Fully qualified name, e.g. `Acme.Widget` or `i32[]`.
    pub fn full_name(&self) -> String {
        match self.data() {
            TypeData::Object => OBJECT_TYPE_NAME.to_string(),
            TypeData::Primitive(kind) => kind.name().to_string(),
            TypeData::Boxed(kind) => kind.boxed_name().to_string(),
            TypeData::String => STRING_TYPE_NAME.to_string(),
            TypeData::TypeDescriptor => TYPE_DESCRIPTOR_TYPE_NAME.to_string(),
            TypeData::Array(element) => format!("{}[]", element.full_name()),
            TypeData::Class(shape) => shape.name.clone(),
            TypeData::Interface(shape) => shape.name.clone(),
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self.data(), TypeData::Primitive(_))
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.data() {
            TypeData::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn boxed_kind(&self) -> Option<PrimitiveKind> {
        match self.data() {
            TypeData::Boxed(kind) => Some(*kind),
            _ => None,
        }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self.data(), TypeData::Array(_))
    }

    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self.data() {
            TypeData::Array(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self.data(), TypeData::String)
    }

    #[inline]
    pub fn is_type_descriptor(&self) -> bool {
        matches!(self.data(), TypeData::TypeDescriptor)
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        matches!(self.data(), TypeData::Interface(_))
    }

    pub fn class_shape(&self) -> Option<&ClassShape> {
        match self.data() {
            TypeData::Class(shape) => Some(shape),
            _ => None,
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.full_name())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// Builder for class descriptors.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    shape: ClassShape,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shape: ClassShape {
                name: name.into(),
                base: None,
                interfaces: Vec::new(),
                flags: ClassFlags::empty(),
            },
        }
    }

    pub fn extends(mut self, base: TypeDescriptor) -> Self {
        self.shape.base = Some(base);
        self
    }

    pub fn implements(mut self, interface: TypeDescriptor) -> Self {
        self.shape.interfaces.push(interface);
        self
    }

    pub fn flags(mut self, flags: ClassFlags) -> Self {
        self.shape.flags |= flags;
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::new(TypeData::Class(self.shape))
    }
}
