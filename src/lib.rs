//! # TSUNAGI: Dynamic Root Component Interop
//!
//! TSUNAGI is the server-side bridge that lets client-side script
//! instantiate UI components dynamically, with strongly typed parameters
//! marshaled from untrusted JSON.
//!
//! ## Architecture
//!
//! The crate is organized around four cooperating pieces:
//!
//! - **Registry** ([`registry`]): the allowlist of component types a client
//!   may instantiate, populated at startup and snapshotted immutably before
//!   any gateway is constructed.
//! - **Type system** ([`descriptor`], [`parameter_types`]): components
//!   declare their parameter schemas statically; the declared types are
//!   compiled into per-type lookup maps cached process-wide.
//! - **Parameter views** ([`value`], [`parameter_view`]): the compact,
//!   append-only structure a renderer consumes, built once per render call.
//! - **Interop layer** ([`interop`], [`host`]): the gateway that validates
//!   and marshals client calls, the host boundary it delegates to, and the
//!   one-way notification channel back to the client.
//!
//! ## Call Flow
//!
//! ```text
//! client ──add(identifier, selector)──▶ gateway ──▶ registry snapshot ──▶ host ──▶ handle
//! client ──render(handle, count, json)─▶ gateway ──▶ type cache ──▶ marshal ──▶ host render
//! client ──remove(handle)─────────────▶ gateway ──▶ host
//! ```
//!
//! Every render call is one-shot: parameters are parsed and coerced under
//! explicit bounds, a parameter view is assembled in arrival order, and the
//! completed view — never a partial one — is handed to the render pipeline.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod interop;
pub mod parameter_types;
pub mod parameter_view;
pub mod registry;
pub mod value;

// Re-exports
pub use error::*;
pub use host::{ComponentHandle, HostError, HostResult, RootComponentHost};
pub use interop::*;
pub use parameter_view::{ParameterView, ParameterViewBuilder};
pub use registry::{ComponentRegistry, RegistrySnapshot};
pub use value::ParameterValue;
