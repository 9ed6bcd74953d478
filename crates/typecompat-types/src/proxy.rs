//! Transparent proxies and the capabilities they expose.
//!
//! A transparent proxy intercepts every operation on behalf of a remote
//! object. Ordinary instance-of tests against a proxy always succeed, so
//! true type compatibility has to come from the [`ProxyBinding`] instead.

use crate::runtime::RuntimeObject;
use crate::types::TypeDescriptor;
use std::fmt;
use std::sync::Arc;

/// Runtime type name reported by every [`TransparentProxy`].
pub const TRANSPARENT_PROXY_TYPE_NAME: &str = "TransparentProxy";

/// Authoritative "can this proxy be cast to `target`" capability.
pub trait RemotingTypeInfo {
    fn can_cast_to(&self, target: &TypeDescriptor, value: &dyn RuntimeObject) -> bool;
}

impl<F> RemotingTypeInfo for F
where
    F: Fn(&TypeDescriptor, &dyn RuntimeObject) -> bool,
{
    fn can_cast_to(&self, target: &TypeDescriptor, value: &dyn RuntimeObject) -> bool {
        self(target, value)
    }
}

/// What the remoting layer knows about the object behind a proxy.
///
/// Either piece may be missing. When both are missing the proxy's type
/// cannot be decided.
#[derive(Clone, Default)]
pub struct ProxyBinding {
    cast_capability: Option<Arc<dyn RemotingTypeInfo + Send + Sync>>,
    proxied_type: Option<TypeDescriptor>,
}

impl ProxyBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cast_capability(
        mut self,
        capability: impl RemotingTypeInfo + Send + Sync + 'static,
    ) -> Self {
        self.cast_capability = Some(Arc::new(capability));
        self
    }

    pub fn with_proxied_type(mut self, proxied_type: TypeDescriptor) -> Self {
        self.proxied_type = Some(proxied_type);
        self
    }

    pub fn cast_capability(&self) -> Option<&(dyn RemotingTypeInfo + Send + Sync)> {
        self.cast_capability.as_deref()
    }

    pub fn proxied_type(&self) -> Option<&TypeDescriptor> {
        self.proxied_type.as_ref()
    }
}

impl fmt::Debug for ProxyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyBinding")
            .field("cast_capability", &self.cast_capability.is_some())
            .field("proxied_type", &self.proxied_type)
            .finish()
    }
}

/// A local stand-in for a remote object.
#[derive(Debug, Clone, Default)]
pub struct TransparentProxy {
    binding: ProxyBinding,
}

impl TransparentProxy {
    pub fn new(binding: ProxyBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &ProxyBinding {
        &self.binding
    }
}

impl RuntimeObject for TransparentProxy {
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::class(TRANSPARENT_PROXY_TYPE_NAME).build()
    }

    fn proxy_binding(&self) -> Option<&ProxyBinding> {
        Some(&self.binding)
    }
}
