//! # Root Component Host
//!
//! The callback contract between the interop gateway and the component
//! lifecycle manager / render pipeline. The gateway owns none of the
//! component state: handles are slots in a table owned by the host, and the
//! gateway only ever references them through this trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::descriptor::ComponentTypeDescriptor;
use crate::parameter_view::ParameterView;

/// Opaque identifier for a root component instance, assigned by the host.
pub type ComponentHandle = u64;

/// Lifecycle and render callbacks the gateway delegates to.
///
/// Rendering is asynchronous; the gateway suspends on the returned future
/// and propagates its completion to the original caller. Cancellation, if
/// needed, is layered by the host implementation — nothing in this contract
/// threads a cancellation token through.
#[async_trait]
#[mockall::automock]
pub trait RootComponentHost: Send + Sync {
    /// Resolves the component type for a live instance handle.
    ///
    /// # Errors
    ///
    /// [`HostError::UnknownHandle`] if no instance owns `handle`.
    fn resolve_component_type(
        &self,
        handle: ComponentHandle,
    ) -> HostResult<ComponentTypeDescriptor>;

    /// Attaches a new root component instance to the given DOM selector and
    /// returns its handle.
    fn add_root_component(
        &self,
        component: ComponentTypeDescriptor,
        dom_selector: &str,
    ) -> HostResult<ComponentHandle>;

    /// Supplies a parameter view to a live instance and renders it.
    async fn render_root_component(
        &self,
        handle: ComponentHandle,
        parameters: ParameterView,
    ) -> HostResult<()>;

    /// Detaches and disposes a root component instance.
    fn remove_root_component(&self, handle: ComponentHandle) -> HostResult<()>;
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Unknown root component handle: {0}")]
    UnknownHandle(ComponentHandle),

    #[error("Host operation failed: {message}")]
    Failed { message: String },
}

pub type HostResult<T> = Result<T, HostError>;
