//! The ordinary is-a relation between descriptors.
//!
//! `source` is-a `target` when the two are equal, when `target` is the root
//! `Object` and `source` is a reference type, when `target` appears on
//! `source`'s base chain or among the interfaces it implements or extends
//! (transitively), or when both are reference-element arrays whose element
//! types are related.
//!
//! Primitives relate only to themselves. Boxed-primitive widening is not
//! part of this relation; see the assignability checks.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use typecompat_types::{RuntimeObject, TypeData, TypeDescriptor};

/// Returns whether `source` is-a `target`.
pub fn is_subtype_of(source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
    if source == target {
        return true;
    }

    match (source.data(), target.data()) {
        (TypeData::Primitive(_), _) | (_, TypeData::Primitive(_)) => false,
        (_, TypeData::Object) => true,
        (TypeData::Array(source_elem), TypeData::Array(target_elem)) => {
            !source_elem.is_primitive()
                && !target_elem.is_primitive()
                && is_subtype_of(source_elem, target_elem)
        }
        _ => reaches_supertype(source, target),
    }
}

/// The ordinary instance-of test: is `value`'s runtime type a `target`?
///
/// A transparent proxy passes this test for every target. Callers that need
/// a real answer for proxies must resolve them before getting here.
pub fn is_instance_of_type(target: &TypeDescriptor, value: &dyn RuntimeObject) -> bool {
    if value.proxy_binding().is_some() {
        return true;
    }
    is_subtype_of(&value.runtime_type(), target)
}

/// Breadth-first walk over base classes and interfaces.
///
/// Descriptors are built bottom-up and cannot form cycles, so the walk always
/// terminates. The visited set only keeps diamond-shaped interface graphs
/// from being expanded more than once.
fn reaches_supertype(source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
    let mut visited: FxHashSet<usize> = FxHashSet::default();
    let mut worklist: SmallVec<[TypeDescriptor; 8]> = SmallVec::new();
    push_supertypes(source, &mut worklist);

    let mut cursor = 0;
    while cursor < worklist.len() {
        let candidate = worklist[cursor].clone();
        cursor += 1;

        if !visited.insert(candidate.identity()) {
            continue;
        }
        if candidate == *target {
            return true;
        }
        push_supertypes(&candidate, &mut worklist);
    }
    false
}

fn push_supertypes(ty: &TypeDescriptor, worklist: &mut SmallVec<[TypeDescriptor; 8]>) {
    match ty.data() {
        TypeData::Class(shape) => {
            worklist.extend(shape.base.iter().cloned());
            worklist.extend(shape.interfaces.iter().cloned());
        }
        TypeData::Interface(shape) => {
            worklist.extend(shape.extends.iter().cloned());
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "../tests/relation_tests.rs"]
mod tests;
