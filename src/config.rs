use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

/// Configuration for an interop gateway, supplied once at construction and
/// reused for every parameter parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteropConfig {
    /// Buffer capacity of the gateway→client notification channel.
    #[serde(default = "default_notification_buffer_size")]
    pub notification_buffer_size: usize,

    /// Upper bound, in bytes, on a render call's parameters payload.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for InteropConfig {
    fn default() -> Self {
        Self {
            notification_buffer_size: default_notification_buffer_size(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl InteropConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    serde_json::from_str(s).map_err(|e| Error::Internal(format!("Failed to parse config: {}", e)))
}

fn default_notification_buffer_size() -> usize {
    16
}

fn default_max_payload_bytes() -> usize {
    1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: InteropConfig = from_str("{}").unwrap();
        assert_eq!(config.notification_buffer_size, 16);
        assert_eq!(config.max_payload_bytes, 1024 * 1024);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config: InteropConfig =
            from_str(r#"{"notification_buffer_size": 4, "max_payload_bytes": 512}"#).unwrap();
        assert_eq!(config.notification_buffer_size, 4);
        assert_eq!(config.max_payload_bytes, 512);
    }
}
