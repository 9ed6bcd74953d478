//! Identity hashes and identity strings.
//!
//! An identity hash depends only on where an object lives, never on its
//! value. Zero-sized values share addresses and therefore hashes.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use typecompat_common::limits::{IDENTITY_HASH_MASK, IDENTITY_HEX_DIGITS};
use typecompat_types::RuntimeObject;

pub fn identity_hash<T: ?Sized>(obj: &T) -> u64 {
    let address = (obj as *const T).cast::<()>() as usize;
    let mut hasher = FxHasher::default();
    address.hash(&mut hasher);
    hasher.finish()
}

/// Identity hash as exactly six uppercase hex digits.
pub fn identity_hex_string<T: ?Sized>(obj: &T) -> String {
    format!(
        "{:0width$X}",
        identity_hash(obj) & IDENTITY_HASH_MASK,
        width = IDENTITY_HEX_DIGITS
    )
}

/// `"<runtime type name>@<identity hex>"`, or the empty string for null.
pub fn identity_to_string(obj: Option<&dyn RuntimeObject>) -> String {
    match obj {
        Some(obj) => format!(
            "{}@{}",
            obj.runtime_type().full_name(),
            identity_hex_string(obj)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../tests/identity_tests.rs"]
mod tests;
