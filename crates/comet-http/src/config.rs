//! Adapter configuration.

use bytes::Bytes;

use crate::DEFAULT_JSONP_CALLBACK;

/// Immutable configuration for one adapter instance.
///
/// Each adapter owns its configuration, so several independently
/// configured adapters (different mounts, different scripts) can run
/// in one process.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Path the protocol endpoint is served at.
    pub mount: String,
    /// Default JSONP callback name, used when a GET request carries no
    /// `jsonp` parameter.
    pub jsonp_callback: String,
    /// Bundled client script served at `<mount>.js`. Opaque to the
    /// adapter; supplied by the embedder.
    pub client_script: Bytes,
    /// Hostname to bind to.
    pub hostname: String,
    /// Port to listen on (0 for OS-assigned).
    pub port: u16,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            mount: "/bayeux".into(),
            jsonp_callback: DEFAULT_JSONP_CALLBACK.into(),
            client_script: Bytes::new(),
            hostname: "127.0.0.1".into(),
            port: 8000,
        }
    }
}
