//! # Component Type Descriptors
//!
//! A root component declares its parameter schema statically through the
//! [`RootComponent`] trait. The interop layer never inspects component
//! values at runtime; it works exclusively with [`ComponentTypeDescriptor`]s
//! resolved from the registry, which carry a stable identity token and a
//! schema function.
//!
//! ## Identity
//!
//! Descriptors for the same Rust type always compare equal: identity is the
//! [`TypeKey`] derived from `std::any::TypeId`, which is stable for the
//! process lifetime and is what the parameter type cache keys on.

use std::any::TypeId;

/// Declares a UI component type that the interop layer may instantiate.
///
/// Implementations provide a display name and the component's property
/// schema. Only properties marked as parameters participate in JSON
/// parameter marshaling; the rest are internal state and are ignored by
/// the type map.
///
/// # Example
///
/// ```rust,no_run
/// use tsunagi::descriptor::{ParameterKind, PropertyDescriptor, RootComponent};
///
/// struct Counter;
///
/// impl RootComponent for Counter {
///     fn type_name() -> &'static str {
///         "Counter"
///     }
///
///     fn properties() -> Vec<PropertyDescriptor> {
///         vec![
///             PropertyDescriptor::parameter("Count", ParameterKind::Integer),
///             PropertyDescriptor::parameter("Label", ParameterKind::String),
///         ]
///     }
/// }
/// ```
pub trait RootComponent: 'static {
    /// Display name used in logs and error messages.
    fn type_name() -> &'static str;

    /// The component's full property schema, parameters and otherwise.
    fn properties() -> Vec<PropertyDescriptor>;
}

/// Stable identity token for a component type within this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey(TypeId);

/// Immutable handle to a component type's declared schema.
///
/// Cheap to copy; the schema itself is produced on demand through the stored
/// function so descriptors stay `Copy` and allocation-free until a type map
/// is actually built.
#[derive(Clone, Copy, Debug)]
pub struct ComponentTypeDescriptor {
    key: TypeKey,
    type_name: &'static str,
    schema: fn() -> Vec<PropertyDescriptor>,
}

impl ComponentTypeDescriptor {
    pub fn of<C: RootComponent>() -> Self {
        Self {
            key: TypeKey(TypeId::of::<C>()),
            type_name: C::type_name(),
            schema: C::properties,
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn properties(&self) -> Vec<PropertyDescriptor> {
        (self.schema)()
    }
}

impl PartialEq for ComponentTypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ComponentTypeDescriptor {}

/// One declared property of a component type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: &'static str,
    kind: ParameterKind,
    parameter: bool,
}

impl PropertyDescriptor {
    /// A property marked as a renderable parameter.
    pub fn parameter(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            parameter: true,
        }
    }

    /// A property the interop layer must not marshal into.
    pub fn property(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            parameter: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn is_parameter(&self) -> bool {
        self.parameter
    }
}

/// The value shape a declared parameter expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum ParameterKind {
    Integer,
    Float,
    String,
    Boolean,
    List,
    Map,
}
