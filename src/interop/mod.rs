//! # Interop Layer
//!
//! Everything that faces the browser side: the gateway serving
//! client-initiated root component calls, the JSON parameter marshaling
//! behind it, and the one-way notification channel back to the client.
//!
//! The layer is deliberately thin over the host boundary — component
//! lifecycle and rendering stay with the host; this layer only validates,
//! marshals, and delegates.

pub mod channel;
pub mod gateway;
mod marshal;

pub use channel::{ClientNotification, InteropChannel, NotificationReceiver};
pub use gateway::{DynamicComponentGateway, InteropError, InteropResult, MAX_PARAMETER_COUNT};
