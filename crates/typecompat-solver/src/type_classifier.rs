//! Simple-property classification.
//!
//! A "simple" property type can be treated as a scalar during dependency and
//! configuration checks, without recursive introspection of its members.
//! The set is a closed table: primitives, strings, type descriptors, and a
//! fixed list of arrays of those.

use typecompat_types::{ClassFlags, PrimitiveKind, TypeData, TypeDescriptor};

/// Which row of the simple-property table a type matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplePropertyKind {
    Primitive(PrimitiveKind),
    String,
    StringArray,
    PrimitiveArray(PrimitiveKind),
    TypeDescriptor,
    TypeDescriptorArray,
}

/// Classifies `ty` as a simple property type, or `None` if it is not one.
pub fn classify_simple_property(ty: &TypeDescriptor) -> Option<SimplePropertyKind> {
    match ty.data() {
        TypeData::Primitive(kind) => Some(SimplePropertyKind::Primitive(*kind)),
        TypeData::String => Some(SimplePropertyKind::String),
        TypeData::TypeDescriptor => Some(SimplePropertyKind::TypeDescriptor),
        TypeData::Array(element) => match element.data() {
            TypeData::String => Some(SimplePropertyKind::StringArray),
            TypeData::TypeDescriptor => Some(SimplePropertyKind::TypeDescriptorArray),
            _ => primitive_array_kind(ty).map(SimplePropertyKind::PrimitiveArray),
        },
        _ => None,
    }
}

pub fn is_simple_property(ty: &TypeDescriptor) -> bool {
    classify_simple_property(ty).is_some()
}

/// Element kind of a primitive array, or `None` if `ty` is not one.
///
/// Unsigned byte arrays are not primitive arrays.
pub fn primitive_array_kind(ty: &TypeDescriptor) -> Option<PrimitiveKind> {
    let kind = ty.element_type()?.primitive_kind()?;
    kind.forms_primitive_array().then_some(kind)
}

pub fn is_primitive_array(ty: &TypeDescriptor) -> bool {
    primitive_array_kind(ty).is_some()
}

/// Whether `ty` names a concrete class that could be constructed.
///
/// Interfaces, abstract classes, open generic definitions, primitives and
/// arrays are not instantiable.
pub fn is_instantiable(ty: &TypeDescriptor) -> bool {
    match ty.data() {
        TypeData::Class(shape) => !shape
            .flags
            .intersects(ClassFlags::ABSTRACT | ClassFlags::GENERIC_DEFINITION),
        TypeData::Object | TypeData::String => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/type_classifier_tests.rs"]
mod tests;
