use super::*;
use crate::proxy_introspection::NoopProxyIntrospector;
use crate::test_support::{FixedVerdict, Hierarchy, init_tracing};
use typecompat_types::{BoxedValue, Instance, ProxyBinding, RemotingTypeInfo, TransparentProxy};

fn proxy_with(binding: ProxyBinding) -> TransparentProxy {
    TransparentProxy::new(binding)
}

#[test]
fn null_is_assignable_to_every_non_primitive_target() {
    let h = Hierarchy::new();
    for target in [
        TypeDescriptor::object(),
        TypeDescriptor::string(),
        TypeDescriptor::type_descriptor(),
        TypeDescriptor::boxed(PrimitiveKind::Int32),
        TypeDescriptor::array_of(TypeDescriptor::primitive(PrimitiveKind::Int32)),
        h.widget,
        h.disposable,
    ] {
        assert!(is_assignable(&target, None), "{target} should accept null");
        assert_eq!(
            explain_assignability(&target, None),
            AssignabilityVerdict::NullAccepted
        );
    }
}

#[test]
fn null_is_not_assignable_to_primitive_targets() {
    for kind in PrimitiveKind::ALL {
        let target = TypeDescriptor::primitive(kind);
        assert!(!is_assignable(&target, None), "{target} should reject null");
        assert_eq!(
            explain_assignability(&target, None),
            AssignabilityVerdict::NullRejectedByPrimitive
        );
    }
}

#[test]
fn boxed_value_is_assignable_to_its_own_primitive() {
    let cases: [BoxedValue; 9] = [
        true.into(),
        1u8.into(),
        'c'.into(),
        (-1i8).into(),
        1i16.into(),
        1i32.into(),
        1i64.into(),
        1.0f32.into(),
        1.0f64.into(),
    ];
    for value in cases {
        let target = TypeDescriptor::primitive(value.kind());
        assert_eq!(
            explain_assignability(&target, Some(&value)),
            AssignabilityVerdict::BoxedPrimitive(value.kind())
        );
    }
}

#[test]
fn mismatched_boxed_value_is_not_assignable() {
    let int = TypeDescriptor::primitive(PrimitiveKind::Int32);
    let long = BoxedValue::Int64(1);
    assert!(!is_assignable(&int, Some(&long)));

    let byte = TypeDescriptor::primitive(PrimitiveKind::Byte);
    assert!(!is_assignable(&byte, Some(&BoxedValue::SByte(1))));
    assert!(is_assignable(&byte, Some(&BoxedValue::Byte(1))));
}

#[test]
fn boxed_value_is_assignable_to_its_wrapper_and_object() {
    let value = BoxedValue::Double(2.5);
    assert_eq!(
        explain_assignability(&TypeDescriptor::boxed(PrimitiveKind::Double), Some(&value)),
        AssignabilityVerdict::InstanceOf
    );
    assert!(is_assignable(&TypeDescriptor::object(), Some(&value)));
    assert!(!is_assignable(&TypeDescriptor::string(), Some(&value)));
}

#[test]
fn ordinary_values_follow_the_hierarchy() {
    let h = Hierarchy::new();
    let widget = Instance::new(h.widget.clone());
    assert!(is_assignable(&h.component, Some(&widget)));
    assert!(is_assignable(&h.renderable, Some(&widget)));
    assert!(!is_assignable(&h.unrelated, Some(&widget)));

    let text = String::from("hello");
    assert!(is_assignable(&TypeDescriptor::string(), Some(&text)));
    assert!(!is_assignable(&h.widget, Some(&text)));

    let descriptor = h.widget.clone();
    assert!(is_assignable(&TypeDescriptor::type_descriptor(), Some(&descriptor)));
}

#[test]
fn proxy_cast_capability_is_authoritative() {
    init_tracing();
    let h = Hierarchy::new();
    // The proxied type says "widget", the capability overrides it.
    let yes = proxy_with(
        ProxyBinding::new()
            .with_cast_capability(FixedVerdict(true))
            .with_proxied_type(h.widget.clone()),
    );
    let no = proxy_with(
        ProxyBinding::new()
            .with_cast_capability(FixedVerdict(false))
            .with_proxied_type(h.widget.clone()),
    );

    for target in [h.unrelated.clone(), h.widget.clone(), TypeDescriptor::string()] {
        assert_eq!(
            explain_assignability(&target, Some(&yes)),
            AssignabilityVerdict::ProxyCastCapability(true)
        );
        assert_eq!(
            explain_assignability(&target, Some(&no)),
            AssignabilityVerdict::ProxyCastCapability(false)
        );
    }
}

#[test]
fn cast_capability_receives_target_and_value() {
    struct OnlyWidgets;
    impl RemotingTypeInfo for OnlyWidgets {
        fn can_cast_to(&self, target: &TypeDescriptor, value: &dyn RuntimeObject) -> bool {
            value.proxy_binding().is_some() && target.full_name() == "Acme.Widget"
        }
    }

    let h = Hierarchy::new();
    let proxy = proxy_with(ProxyBinding::new().with_cast_capability(OnlyWidgets));
    assert!(is_assignable(&h.widget, Some(&proxy)));
    assert!(!is_assignable(&h.component, Some(&proxy)));
}

#[test]
fn proxied_type_replaces_runtime_type() {
    init_tracing();
    let h = Hierarchy::new();
    let proxy = proxy_with(ProxyBinding::new().with_proxied_type(h.widget.clone()));

    assert!(is_assignable(&h.widget, Some(&proxy)));
    assert!(is_assignable(&h.disposable, Some(&proxy)));
    assert_eq!(
        explain_assignability(&h.unrelated, Some(&proxy)),
        AssignabilityVerdict::NotAssignable
    );
}

#[test]
fn proxied_boxed_type_widens_to_its_primitive() {
    let proxy = proxy_with(
        ProxyBinding::new().with_proxied_type(TypeDescriptor::boxed(PrimitiveKind::Int16)),
    );
    assert_eq!(
        explain_assignability(&TypeDescriptor::primitive(PrimitiveKind::Int16), Some(&proxy)),
        AssignabilityVerdict::BoxedPrimitive(PrimitiveKind::Int16)
    );
}

#[test]
fn unresolved_proxy_is_not_assignable() {
    let proxy = proxy_with(ProxyBinding::new());
    assert_eq!(
        explain_assignability(&TypeDescriptor::object(), Some(&proxy)),
        AssignabilityVerdict::UnresolvedProxy
    );
    assert!(!is_assignable(&TypeDescriptor::object(), Some(&proxy)));
}

#[test]
fn not_transparent_proxy_variant_rejects_all_proxies() {
    let h = Hierarchy::new();
    let proxies = [
        proxy_with(ProxyBinding::new().with_cast_capability(FixedVerdict(true))),
        proxy_with(ProxyBinding::new().with_proxied_type(h.widget.clone())),
        proxy_with(ProxyBinding::new()),
    ];
    for proxy in &proxies {
        assert!(!is_assignable_and_not_transparent_proxy(
            &TypeDescriptor::object(),
            Some(proxy)
        ));
    }
    assert!(is_assignable(&h.widget, Some(&proxies[0])));
    assert!(is_assignable(&h.widget, Some(&proxies[1])));
}

#[test]
fn not_transparent_proxy_variant_otherwise_matches_is_assignable() {
    let h = Hierarchy::new();
    let widget = Instance::new(h.widget.clone());
    assert!(is_assignable_and_not_transparent_proxy(&h.component, Some(&widget)));
    assert!(!is_assignable_and_not_transparent_proxy(&h.unrelated, Some(&widget)));
    assert!(is_assignable_and_not_transparent_proxy(&h.widget, None));
    assert!(!is_assignable_and_not_transparent_proxy(
        &TypeDescriptor::primitive(PrimitiveKind::Int32),
        None
    ));
    assert!(is_assignable_and_not_transparent_proxy(
        &TypeDescriptor::primitive(PrimitiveKind::Int32),
        Some(&BoxedValue::Int32(3))
    ));
}

#[test]
fn noop_introspector_falls_back_to_ordinary_checks() {
    let h = Hierarchy::new();
    let checker = AssignabilityChecker::new(&NoopProxyIntrospector);
    let proxy = proxy_with(ProxyBinding::new().with_cast_capability(FixedVerdict(false)));

    // Without remoting support the proxy masquerades as every type.
    assert_eq!(
        checker.explain(&h.unrelated, Some(&proxy)),
        AssignabilityVerdict::InstanceOf
    );
    assert!(checker.is_assignable_and_not_transparent_proxy(&h.unrelated, Some(&proxy)));

    let widget = Instance::new(h.widget.clone());
    assert!(checker.is_assignable(&h.component, Some(&widget)));
    assert!(!checker.is_assignable(&h.unrelated, Some(&widget)));
}

#[test]
fn checker_accepts_introspector_trait_objects() {
    let h = Hierarchy::new();
    let introspector: &dyn ProxyIntrospector = &RemotingIntrospector;
    let checker = AssignabilityChecker::new(introspector);
    let proxy = proxy_with(ProxyBinding::new().with_proxied_type(h.component.clone()));
    assert!(checker.is_assignable(&h.disposable, Some(&proxy)));
    assert!(!checker.is_assignable_and_not_transparent_proxy(&h.disposable, Some(&proxy)));
}

#[test]
fn deep_and_wide_hierarchies_stay_assignable() {
    let base = TypeDescriptor::class("Chain.Level0").build();
    let mut deep = base.clone();
    for level in 1..=70 {
        deep = TypeDescriptor::class(format!("Chain.Level{level}"))
            .extends(deep)
            .build();
    }
    let deep_value = Instance::new(deep);
    assert!(is_assignable(&base, Some(&deep_value)));

    let interfaces: Vec<_> = (0..4_200)
        .map(|i| TypeDescriptor::interface(format!("Fan.I{i}"), []))
        .collect();
    let mut builder = TypeDescriptor::class("Fan.Impl");
    for interface in &interfaces {
        builder = builder.implements(interface.clone());
    }
    let wide_value = Instance::new(builder.build());
    assert!(is_assignable(&interfaces[0], Some(&wide_value)));
    assert_eq!(
        explain_assignability(&interfaces[4_199], Some(&wide_value)),
        AssignabilityVerdict::InstanceOf
    );
}

#[test]
fn excluding_proxies_reports_rejection_before_other_rules() {
    let h = Hierarchy::new();
    let checker = AssignabilityChecker::new(&RemotingIntrospector);
    let proxy = proxy_with(ProxyBinding::new().with_proxied_type(h.widget.clone()));
    assert_eq!(
        checker.explain_excluding_proxies(&h.widget, Some(&proxy)),
        AssignabilityVerdict::ProxyRejected
    );

    let widget = Instance::new(h.widget.clone());
    assert_eq!(
        checker.explain_excluding_proxies(&h.component, Some(&widget)),
        AssignabilityVerdict::InstanceOf
    );
    assert_eq!(
        checker.explain_excluding_proxies(&h.widget, None),
        AssignabilityVerdict::NullAccepted
    );
}
