use std::sync::Arc;

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};

use tsunagi::config::InteropConfig;
use tsunagi::descriptor::{
    ComponentTypeDescriptor, ParameterKind, PropertyDescriptor, RootComponent,
};
use tsunagi::host::{ComponentHandle, HostResult, RootComponentHost};
use tsunagi::interop::{DynamicComponentGateway, InteropChannel};
use tsunagi::{ComponentRegistry, ParameterValue, ParameterView, ParameterViewBuilder};

struct Dashboard;

impl RootComponent for Dashboard {
    fn type_name() -> &'static str {
        "Dashboard"
    }
    fn properties() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::parameter("Title", ParameterKind::String),
            PropertyDescriptor::parameter("Refresh", ParameterKind::Integer),
            PropertyDescriptor::parameter("Series", ParameterKind::List),
        ]
    }
}

struct NoopHost;

#[async_trait]
impl RootComponentHost for NoopHost {
    fn resolve_component_type(
        &self,
        _handle: ComponentHandle,
    ) -> HostResult<ComponentTypeDescriptor> {
        Ok(ComponentTypeDescriptor::of::<Dashboard>())
    }

    fn add_root_component(
        &self,
        _component: ComponentTypeDescriptor,
        _dom_selector: &str,
    ) -> HostResult<ComponentHandle> {
        Ok(0)
    }

    async fn render_root_component(
        &self,
        _handle: ComponentHandle,
        _parameters: ParameterView,
    ) -> HostResult<()> {
        Ok(())
    }

    fn remove_root_component(&self, _handle: ComponentHandle) -> HostResult<()> {
        Ok(())
    }
}

fn bench_parameter_view_builder(c: &mut Criterion) {
    c.bench_function("build 100-parameter view", |b| {
        b.iter(|| {
            let mut builder = ParameterViewBuilder::new(100);
            for i in 0..100 {
                builder.add(format!("p{}", i), ParameterValue::Integer(i));
            }
            builder.into_parameter_view()
        })
    });
}

fn bench_render_marshaling(c: &mut Criterion) {
    let mut registry = ComponentRegistry::new();
    registry.register::<Dashboard>("dashboard").unwrap();

    let gateway = DynamicComponentGateway::attach(
        &registry,
        Arc::new(NoopHost),
        Arc::new(InteropChannel::new(16)),
        InteropConfig::default(),
    );

    let payload =
        br#"{"Title": "ops", "Refresh": 30, "Series": [1, 2, 3, 4], "Theme": "dark"}"#;
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("render four-parameter payload", |b| {
        b.iter(|| {
            rt.block_on(gateway.render_root_component(0, 4, payload))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_parameter_view_builder, bench_render_marshaling);
criterion_main!(benches);
