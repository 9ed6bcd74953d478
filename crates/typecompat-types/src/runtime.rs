//! Runtime values as seen by the assignability checks.

use crate::primitive::PrimitiveKind;
use crate::proxy::ProxyBinding;
use crate::types::TypeDescriptor;

/// A value that can report its own runtime type.
///
/// The null value is modelled as `Option::<&dyn RuntimeObject>::None` at
/// call sites, never as an implementor of this trait.
pub trait RuntimeObject {
    /// The concrete type of this value.
    fn runtime_type(&self) -> TypeDescriptor;

    /// Present when this value is a transparent proxy standing in for
    /// another object.
    fn proxy_binding(&self) -> Option<&ProxyBinding> {
        None
    }
}

/// A boxed primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxedValue {
    Boolean(bool),
    Byte(u8),
    Char(char),
    SByte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Single(f32),
    Double(f64),
}

impl BoxedValue {
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Byte(_) => PrimitiveKind::Byte,
            Self::Char(_) => PrimitiveKind::Char,
            Self::SByte(_) => PrimitiveKind::SByte,
            Self::Int16(_) => PrimitiveKind::Int16,
            Self::Int32(_) => PrimitiveKind::Int32,
            Self::Int64(_) => PrimitiveKind::Int64,
            Self::Single(_) => PrimitiveKind::Single,
            Self::Double(_) => PrimitiveKind::Double,
        }
    }
}

impl RuntimeObject for BoxedValue {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::boxed(self.kind())
    }
}

macro_rules! boxed_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for BoxedValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

boxed_from! {
    bool => Boolean,
    u8 => Byte,
    char => Char,
    i8 => SByte,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Single,
    f64 => Double,
}

impl RuntimeObject for String {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::string()
    }
}

impl RuntimeObject for TypeDescriptor {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::type_descriptor()
    }
}

/// An instance of an arbitrary class, interface implementation or array
/// type, identified only by its runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    ty: TypeDescriptor,
}

impl Instance {
    pub fn new(ty: TypeDescriptor) -> Self {
        Self { ty }
    }
}

impl RuntimeObject for Instance {
    fn runtime_type(&self) -> TypeDescriptor {
        self.ty.clone()
    }
}
