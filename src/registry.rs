//! # Component Registry
//!
//! The registry is the allowlist of component types that client-side script
//! is permitted to instantiate. It is populated during application startup,
//! before any interop gateway exists, and gateways only ever see an
//! immutable [`RegistrySnapshot`] taken at construction time — later
//! mutation of the live registry cannot affect a gateway that is already
//! serving a client.
//!
//! There is no removal operation: once a gateway has snapshotted the
//! registry, entries are permanent for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::descriptor::{ComponentTypeDescriptor, RootComponent};

/// Mutable, startup-time allowlist mapping identifiers to component types.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentTypeDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component type under `identifier`.
    ///
    /// Identifiers are case-sensitive and must be unique; re-registration is
    /// a configuration bug and fails with
    /// [`RegistryError::DuplicateIdentifier`], leaving the first mapping in
    /// place.
    pub fn register<C: RootComponent>(&mut self, identifier: &str) -> RegistryResult<()> {
        self.register_descriptor(identifier, ComponentTypeDescriptor::of::<C>())
    }

    pub fn register_descriptor(
        &mut self,
        identifier: &str,
        descriptor: ComponentTypeDescriptor,
    ) -> RegistryResult<()> {
        if self.components.contains_key(identifier) {
            return Err(RegistryError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }

        debug!(
            "Registered root component: {} -> {}",
            identifier,
            descriptor.type_name()
        );
        self.components.insert(identifier.to_string(), descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Takes an immutable copy of the current mappings.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            components: Arc::new(self.components.clone()),
        }
    }
}

/// Immutable copy of the registry, shared by the gateways built from it.
#[derive(Clone)]
pub struct RegistrySnapshot {
    components: Arc<HashMap<String, ComponentTypeDescriptor>>,
}

impl RegistrySnapshot {
    pub fn get(&self, identifier: &str) -> Option<ComponentTypeDescriptor> {
        self.components.get(identifier).copied()
    }

    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.components.keys().cloned().collect();
        identifiers.sort();
        identifiers
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Root component identifier already registered: {identifier}")]
    DuplicateIdentifier { identifier: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use crate::descriptor::{ParameterKind, PropertyDescriptor};

    use super::*;

    struct Counter;

    impl RootComponent for Counter {
        fn type_name() -> &'static str {
            "Counter"
        }
        fn properties() -> Vec<PropertyDescriptor> {
            vec![PropertyDescriptor::parameter("Count", ParameterKind::Integer)]
        }
    }

    struct Banner;

    impl RootComponent for Banner {
        fn type_name() -> &'static str {
            "Banner"
        }
        fn properties() -> Vec<PropertyDescriptor> {
            vec![]
        }
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Counter>("my-counter").unwrap();

        let result = registry.register::<Banner>("my-counter");
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateIdentifier { .. })
        ));

        // The first mapping survives.
        let snapshot = registry.snapshot();
        assert_eq!(
            snapshot.get("my-counter"),
            Some(ComponentTypeDescriptor::of::<Counter>())
        );
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Counter>("counter").unwrap();
        registry.register::<Banner>("Counter").unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(
            snapshot.get("counter"),
            Some(ComponentTypeDescriptor::of::<Counter>())
        );
        assert_eq!(
            snapshot.get("Counter"),
            Some(ComponentTypeDescriptor::of::<Banner>())
        );
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_registration() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Counter>("counter").unwrap();

        let snapshot = registry.snapshot();
        registry.register::<Banner>("banner").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("banner").is_none());
        assert_eq!(registry.len(), 2);
    }
}
