//! # Dynamic Component Interop Gateway
//!
//! The entry point for client-initiated root component calls. A gateway is
//! constructed over an immutable registry snapshot and a host boundary, and
//! serves one client connection: calls arrive sequentially from that
//! client, while the parameter type cache behind the gateway is shared
//! process-wide.
//!
//! ## Key Behaviors
//!
//! - **Allowlist enforcement**: only identifiers present in the snapshot
//!   can be instantiated; the snapshot never changes after construction.
//! - **Bounded marshaling**: the declared parameter count is capped at
//!   [`MAX_PARAMETER_COUNT`] and the payload at a configured byte limit
//!   before any parsing happens, so a misreporting client cannot induce
//!   unbounded allocation.
//! - **Attach announcement**: a gateway with a non-empty snapshot announces
//!   itself to the client exactly once, at construction; an empty snapshot
//!   announces nothing.
//! - **One-shot calls**: a failed render is reported to the caller and
//!   nothing is retried; no partial parameter view ever reaches the host.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::InteropConfig;
use crate::descriptor::ParameterKind;
use crate::host::{ComponentHandle, HostError, RootComponentHost};
use crate::parameter_types::ParameterTypeCache;
use crate::registry::{ComponentRegistry, RegistrySnapshot};

use super::channel::{ClientNotification, InteropChannel};
use super::marshal;

/// Upper bound on a render call's declared parameter count.
///
/// Caps the worst-case buffer allocation a client can request; it does not
/// need to match the payload's actual field count.
pub const MAX_PARAMETER_COUNT: usize = 100;

/// Serves dynamic root component calls for one client connection.
pub struct DynamicComponentGateway {
    components: RegistrySnapshot,
    host: Arc<dyn RootComponentHost>,
    parameter_types: ParameterTypeCache,
    config: InteropConfig,
    /// Client-facing channel reference, released on dispose.
    channel: Mutex<Option<Arc<InteropChannel>>>,
}

impl DynamicComponentGateway {
    /// Constructs a gateway over a snapshot of `registry`, announcing it on
    /// `channel` when the snapshot is non-empty.
    pub fn attach(
        registry: &ComponentRegistry,
        host: Arc<dyn RootComponentHost>,
        channel: Arc<InteropChannel>,
        config: InteropConfig,
    ) -> Self {
        let components = registry.snapshot();
        if !components.is_empty() {
            let _ = channel.sync_notify(ClientNotification::GatewayAttached {
                identifiers: components.identifiers(),
            });
        }
        Self {
            components,
            host,
            parameter_types: ParameterTypeCache::global().clone(),
            config,
            channel: Mutex::new(Some(channel)),
        }
    }

    /// Instantiates a registered component under the given DOM selector.
    ///
    /// # Errors
    ///
    /// [`InteropError::UnknownIdentifier`] if `identifier` was never
    /// registered; no handle is allocated in that case.
    pub fn add_root_component(
        &self,
        identifier: &str,
        dom_selector: &str,
    ) -> InteropResult<ComponentHandle> {
        let descriptor =
            self.components
                .get(identifier)
                .ok_or_else(|| InteropError::UnknownIdentifier {
                    identifier: identifier.to_string(),
                })?;
        let handle = self.host.add_root_component(descriptor, dom_selector)?;
        debug!(
            "Added root component {} ({}) -> handle {}",
            identifier,
            descriptor.type_name(),
            handle
        );
        Ok(handle)
    }

    /// Marshals `parameters_json` into a parameter view and renders the
    /// instance behind `handle`.
    ///
    /// `declared_parameter_count` sizes the view's buffer and is validated
    /// against `[0, MAX_PARAMETER_COUNT]` before anything is parsed. The
    /// count stays signed on the wire so a misreporting client's negative
    /// value is representable and rejected rather than reinterpreted.
    #[instrument(skip(self, parameters_json))]
    pub async fn render_root_component(
        &self,
        handle: ComponentHandle,
        declared_parameter_count: i32,
        parameters_json: &[u8],
    ) -> InteropResult<()> {
        if declared_parameter_count < 0
            || declared_parameter_count as usize > MAX_PARAMETER_COUNT
        {
            return Err(InteropError::ParameterCountOutOfRange {
                declared: declared_parameter_count,
                max: MAX_PARAMETER_COUNT,
            });
        }
        if parameters_json.len() > self.config.max_payload_bytes {
            return Err(InteropError::PayloadTooLarge {
                size: parameters_json.len(),
                max: self.config.max_payload_bytes,
            });
        }

        let descriptor = self.host.resolve_component_type(handle)?;
        let parameter_types = self.parameter_types.get_parameter_types(&descriptor);
        let view = marshal::parse_parameter_view(
            parameters_json,
            &parameter_types,
            declared_parameter_count as usize,
        )?;

        self.host.render_root_component(handle, view).await?;
        Ok(())
    }

    /// Detaches the instance behind `handle`. No gateway-local state exists
    /// for it.
    pub fn remove_root_component(&self, handle: ComponentHandle) -> InteropResult<()> {
        self.host.remove_root_component(handle)?;
        debug!("Removed root component handle {}", handle);
        Ok(())
    }

    /// Releases the client-facing channel reference held for this gateway.
    /// Idempotent.
    pub fn dispose(&self) {
        if let Ok(mut channel) = self.channel.lock() {
            if channel.take().is_some() {
                debug!("Gateway disposed");
            }
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.channel.lock().map(|c| c.is_none()).unwrap_or(true)
    }
}

#[derive(Debug, Error)]
pub enum InteropError {
    #[error("Unknown root component identifier: {identifier}")]
    UnknownIdentifier { identifier: String },

    #[error("Declared parameter count {declared} is outside the range 0..={max}")]
    ParameterCountOutOfRange { declared: i32, max: usize },

    #[error("Parameters payload of {size} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Parameter '{parameter}' expected {expected}, got JSON {found}")]
    TypeMismatch {
        parameter: String,
        expected: ParameterKind,
        found: &'static str,
    },

    #[error("Cannot infer a type for unknown parameter '{parameter}' from JSON {found}")]
    UnknownParameterShape {
        parameter: String,
        found: &'static str,
    },

    #[error("Parameters payload holds more fields than the declared count {declared}")]
    DeclaredCountExceeded { declared: usize },

    #[error("Parameters payload is not a JSON object")]
    PayloadNotAnObject,

    #[error("Malformed parameters payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

pub type InteropResult<T> = Result<T, InteropError>;
