//! Assignability of runtime values to target types.
//!
//! The decision runs in a fixed order:
//!
//! 1. A null value is assignable to every non-primitive target.
//! 2. A transparent proxy is resolved before any ordinary type test, because
//!    ordinary tests report a proxy as an instance of every type. Its cast
//!    capability, when present, is authoritative. Otherwise the type it
//!    claims to proxy stands in for its runtime type. A proxy with neither is
//!    not assignable.
//! 3. The runtime type must be-a target, or the target must be a primitive
//!    whose boxed wrapper is the runtime type.

use crate::proxy_introspection::{ProxyIntrospector, RemotingIntrospector};
use crate::relation::{is_instance_of_type, is_subtype_of};
use tracing::{debug, trace};
use typecompat_types::{PrimitiveKind, RuntimeObject, TypeDescriptor};

/// Why a value was or was not found assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignabilityVerdict {
    /// Null value, non-primitive target.
    NullAccepted,
    /// Null value, primitive target.
    NullRejectedByPrimitive,
    /// The proxy's cast capability answered with this verdict.
    ProxyCastCapability(bool),
    /// A proxy exposing neither a cast capability nor a proxied type.
    UnresolvedProxy,
    /// Any transparent proxy, when proxies are excluded outright.
    ProxyRejected,
    /// The runtime type is-a target.
    InstanceOf,
    /// The runtime type is the boxed wrapper of the primitive target.
    BoxedPrimitive(PrimitiveKind),
    NotAssignable,
}

impl AssignabilityVerdict {
    #[inline]
    pub fn is_assignable(self) -> bool {
        match self {
            Self::NullAccepted | Self::InstanceOf | Self::BoxedPrimitive(_) => true,
            Self::ProxyCastCapability(verdict) => verdict,
            Self::NullRejectedByPrimitive
            | Self::UnresolvedProxy
            | Self::ProxyRejected
            | Self::NotAssignable => false,
        }
    }
}

/// Assignability checks over a chosen proxy introspector.
#[derive(Debug, Clone, Copy)]
pub struct AssignabilityChecker<'a, P: ProxyIntrospector + ?Sized = RemotingIntrospector> {
    introspector: &'a P,
}

impl<'a, P: ProxyIntrospector + ?Sized> AssignabilityChecker<'a, P> {
    pub fn new(introspector: &'a P) -> Self {
        Self { introspector }
    }

    /// Can `value` be treated as an instance of `target`?
    pub fn is_assignable(
        &self,
        target: &TypeDescriptor,
        value: Option<&dyn RuntimeObject>,
    ) -> bool {
        self.explain(target, value).is_assignable()
    }

    /// Like [`is_assignable`](Self::is_assignable), but any transparent proxy
    /// is rejected regardless of what it stands in for.
    pub fn is_assignable_and_not_transparent_proxy(
        &self,
        target: &TypeDescriptor,
        value: Option<&dyn RuntimeObject>,
    ) -> bool {
        self.explain_excluding_proxies(target, value).is_assignable()
    }

    /// [`explain`](Self::explain), short-circuiting to
    /// [`AssignabilityVerdict::ProxyRejected`] for any value the introspector
    /// recognises as a transparent proxy.
    pub fn explain_excluding_proxies(
        &self,
        target: &TypeDescriptor,
        value: Option<&dyn RuntimeObject>,
    ) -> AssignabilityVerdict {
        if let Some(value) = value {
            if self.introspector.is_transparent_proxy(value) {
                trace!(target_type = %target, "rejecting transparent proxy");
                return AssignabilityVerdict::ProxyRejected;
            }
        }
        self.explain(target, value)
    }

    /// Decides assignability and reports which rule decided it.
    pub fn explain(
        &self,
        target: &TypeDescriptor,
        value: Option<&dyn RuntimeObject>,
    ) -> AssignabilityVerdict {
        let Some(value) = value else {
            return if target.is_primitive() {
                AssignabilityVerdict::NullRejectedByPrimitive
            } else {
                AssignabilityVerdict::NullAccepted
            };
        };

        let proxied_type = if self.introspector.is_transparent_proxy(value) {
            if let Some(capability) = self.introspector.cast_capability(value) {
                let verdict = capability.can_cast_to(target, value);
                trace!(target_type = %target, verdict, "proxy cast capability decided");
                return AssignabilityVerdict::ProxyCastCapability(verdict);
            }
            match self.introspector.proxied_type(value) {
                Some(proxied) => {
                    trace!(target_type = %target, proxied = %proxied, "checking proxied type");
                    Some(proxied)
                }
                None => {
                    debug!(target_type = %target, "transparent proxy has no resolvable type");
                    return AssignabilityVerdict::UnresolvedProxy;
                }
            }
        } else {
            None
        };

        // The proxied type replaces the runtime type and is related to the
        // original target, not substituted for the target.
        let instance_of = match &proxied_type {
            Some(proxied) => is_subtype_of(proxied, target),
            None => is_instance_of_type(target, value),
        };
        if instance_of {
            return AssignabilityVerdict::InstanceOf;
        }

        let runtime_type = proxied_type.unwrap_or_else(|| value.runtime_type());
        match (target.primitive_kind(), runtime_type.boxed_kind()) {
            (Some(kind), Some(boxed)) if kind.accepts_boxed(boxed) => {
                AssignabilityVerdict::BoxedPrimitive(kind)
            }
            _ => AssignabilityVerdict::NotAssignable,
        }
    }
}

impl Default for AssignabilityChecker<'static, RemotingIntrospector> {
    fn default() -> Self {
        Self::new(&RemotingIntrospector)
    }
}

/// Can `value` be treated as an instance of `target`?
///
/// `None` is the null value. Transparent proxies are resolved through their
/// own [`ProxyBinding`](typecompat_types::ProxyBinding).
pub fn is_assignable(target: &TypeDescriptor, value: Option<&dyn RuntimeObject>) -> bool {
    AssignabilityChecker::new(&RemotingIntrospector).is_assignable(target, value)
}

/// [`is_assignable`], except that every transparent proxy is rejected.
///
/// Used where a remote stand-in is unacceptable even when type-compatible,
/// such as local-only dependency injection.
pub fn is_assignable_and_not_transparent_proxy(
    target: &TypeDescriptor,
    value: Option<&dyn RuntimeObject>,
) -> bool {
    AssignabilityChecker::new(&RemotingIntrospector)
        .is_assignable_and_not_transparent_proxy(target, value)
}

pub fn explain_assignability(
    target: &TypeDescriptor,
    value: Option<&dyn RuntimeObject>,
) -> AssignabilityVerdict {
    AssignabilityChecker::new(&RemotingIntrospector).explain(target, value)
}

#[cfg(test)]
#[path = "../tests/assignability_tests.rs"]
mod tests;
