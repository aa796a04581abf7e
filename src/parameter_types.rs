//! # Parameter Type Cache
//!
//! Maps a component type to its declared parameter types. The map for a
//! given type is computed once, on first request, from the type's static
//! schema, and then reused for the process lifetime. The cache is shared
//! across every gateway in the process, so the get-or-insert path must be
//! safe under concurrent first use: `DashMap::entry().or_insert_with`
//! computes under the shard lock and publishes exactly one map per type key.
//!
//! Invalidation exists for hot-reload scenarios; it simply drops the cached
//! map so the next request recomputes it.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use lazy_static::lazy_static;
use tracing::trace;

use crate::descriptor::{ComponentTypeDescriptor, ParameterKind, TypeKey};

/// A declared parameter as recorded in a type map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclaredParameter {
    pub name: &'static str,
    pub kind: ParameterKind,
}

/// Parameter name → expected kind for one component type.
///
/// Lookup ignores ASCII case. Only properties explicitly marked as
/// parameters appear here.
#[derive(Debug)]
pub struct ParameterTypeMap {
    entries: HashMap<String, DeclaredParameter>,
}

impl ParameterTypeMap {
    fn build(descriptor: &ComponentTypeDescriptor) -> Self {
        let entries = descriptor
            .properties()
            .into_iter()
            .filter(|property| property.is_parameter())
            .map(|property| {
                (
                    property.name().to_ascii_lowercase(),
                    DeclaredParameter {
                        name: property.name(),
                        kind: property.kind(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&DeclaredParameter> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    static ref GLOBAL_CACHE: ParameterTypeCache = ParameterTypeCache::new();
}

/// Process-wide cache of [`ParameterTypeMap`]s keyed by type identity.
#[derive(Clone, Default)]
pub struct ParameterTypeCache {
    types: Arc<DashMap<TypeKey, Arc<ParameterTypeMap>>>,
}

impl ParameterTypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by every gateway in the process.
    pub fn global() -> &'static ParameterTypeCache {
        &GLOBAL_CACHE
    }

    /// Returns the cached type map for `descriptor`, computing it on first
    /// request. Concurrent first requests for the same type observe the
    /// same map.
    pub fn get_parameter_types(
        &self,
        descriptor: &ComponentTypeDescriptor,
    ) -> Arc<ParameterTypeMap> {
        self.types
            .entry(descriptor.key())
            .or_insert_with(|| {
                trace!("Building parameter type map for {}", descriptor.type_name());
                Arc::new(ParameterTypeMap::build(descriptor))
            })
            .clone()
    }

    /// Drops the cached map for one type; the next request recomputes it.
    pub fn invalidate(&self, key: TypeKey) {
        self.types.remove(&key);
    }

    /// Drops every cached map.
    pub fn clear(&self) {
        self.types.clear();
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
