//! Small null-aware helpers.

use typecompat_types::MethodDescriptor;

/// True for a missing or zero-length array.
pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    array.is_none_or(<[T]>::is_empty)
}

/// Equality where two nulls are equal and a null never equals a value.
pub fn null_safe_equals<T: PartialEq + ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// `"<declaring type full name>.<method name>"`.
pub fn qualified_method_name(method: &MethodDescriptor) -> String {
    format!("{}.{}", method.declaring_type.full_name(), method.name)
}

#[cfg(test)]
#[path = "../tests/utils_tests.rs"]
mod tests;
