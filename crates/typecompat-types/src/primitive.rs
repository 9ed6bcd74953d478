//! The closed set of primitive kinds and the static tables built on it.

use serde::{Deserialize, Serialize};

/// A primitive (unboxed, value-type) kind.
///
/// This is a closed enumeration. There is no arbitrary numeric coercion
/// between kinds; each kind relates only to its own boxed wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    /// Unsigned 8-bit integer.
    Byte,
    Char,
    /// Signed 8-bit integer.
    SByte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
}

/// Primitive kinds whose boxed wrapper is interchangeable with the unboxed
/// kind during assignability checks.
///
/// Reflection-driven assignment (constructor and property resolution by
/// declared parameter type) receives boxed values where the declared target
/// is the unboxed primitive.
pub const BOXING_TABLE: [PrimitiveKind; 9] = [
    PrimitiveKind::Boolean,
    PrimitiveKind::Byte,
    PrimitiveKind::Char,
    PrimitiveKind::SByte,
    PrimitiveKind::Int32,
    PrimitiveKind::Int16,
    PrimitiveKind::Int64,
    PrimitiveKind::Single,
    PrimitiveKind::Double,
];

/// Element kinds whose arrays count as "primitive arrays".
///
/// `Byte` is deliberately absent: unsigned byte arrays are not primitive
/// arrays, while signed byte arrays are.
pub const PRIMITIVE_ARRAY_KINDS: [PrimitiveKind; 8] = [
    PrimitiveKind::Boolean,
    PrimitiveKind::SByte,
    PrimitiveKind::Char,
    PrimitiveKind::Int16,
    PrimitiveKind::Int32,
    PrimitiveKind::Int64,
    PrimitiveKind::Single,
    PrimitiveKind::Double,
];

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::SByte,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Single,
        PrimitiveKind::Double,
    ];

    /// Name of the unboxed kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Byte => "u8",
            Self::Char => "char",
            Self::SByte => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Single => "f32",
            Self::Double => "f64",
        }
    }

    /// Fully qualified name of the boxed wrapper.
    pub const fn boxed_name(self) -> &'static str {
        match self {
            Self::Boolean => "Boxed<bool>",
            Self::Byte => "Boxed<u8>",
            Self::Char => "Boxed<char>",
            Self::SByte => "Boxed<i8>",
            Self::Int16 => "Boxed<i16>",
            Self::Int32 => "Boxed<i32>",
            Self::Int64 => "Boxed<i64>",
            Self::Single => "Boxed<f32>",
            Self::Double => "Boxed<f64>",
        }
    }

    /// Whether a boxed value of this kind may stand in for the unboxed kind.
    pub fn accepts_boxed(self, boxed: PrimitiveKind) -> bool {
        self == boxed && BOXING_TABLE.contains(&self)
    }

    /// Whether an array of this kind is a primitive array.
    pub fn forms_primitive_array(self) -> bool {
        PRIMITIVE_ARRAY_KINDS.contains(&self)
    }
}
