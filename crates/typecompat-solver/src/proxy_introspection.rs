//! Remote-proxy introspection.
//!
//! The assignability checks ask exactly three questions about a value: is it
//! a transparent proxy, does it expose a cast capability, and what type does
//! it claim to proxy. Hosts without a remoting layer use
//! [`NoopProxyIntrospector`], which keeps the control flow but never reports
//! a proxy.

use typecompat_types::{RemotingTypeInfo, RuntimeObject, TypeDescriptor};

/// Answers the proxy questions the assignability checks depend on.
pub trait ProxyIntrospector {
    fn is_transparent_proxy(&self, value: &dyn RuntimeObject) -> bool;

    fn cast_capability<'v>(&self, value: &'v dyn RuntimeObject)
    -> Option<&'v dyn RemotingTypeInfo>;

    fn proxied_type(&self, value: &dyn RuntimeObject) -> Option<TypeDescriptor>;
}

/// Introspector backed by the values' own [`typecompat_types::ProxyBinding`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemotingIntrospector;

impl ProxyIntrospector for RemotingIntrospector {
    fn is_transparent_proxy(&self, value: &dyn RuntimeObject) -> bool {
        value.proxy_binding().is_some()
    }

    fn cast_capability<'v>(
        &self,
        value: &'v dyn RuntimeObject,
    ) -> Option<&'v dyn RemotingTypeInfo> {
        let capability = value.proxy_binding()?.cast_capability()?;
        Some(capability as &dyn RemotingTypeInfo)
    }

    fn proxied_type(&self, value: &dyn RuntimeObject) -> Option<TypeDescriptor> {
        value.proxy_binding()?.proxied_type().cloned()
    }
}

/// Introspector for environments without remoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProxyIntrospector;

impl ProxyIntrospector for NoopProxyIntrospector {
    fn is_transparent_proxy(&self, _value: &dyn RuntimeObject) -> bool {
        false
    }

    fn cast_capability<'v>(
        &self,
        _value: &'v dyn RuntimeObject,
    ) -> Option<&'v dyn RemotingTypeInfo> {
        None
    }

    fn proxied_type(&self, _value: &dyn RuntimeObject) -> Option<TypeDescriptor> {
        None
    }
}
