//! Typed context document.
//!
//! The store treats a context as opaque; [`ContextConfig`] is the schema the
//! CLI stores when it uses [`TomlCodec`](crate::codec::TomlCodec).  Example:
//!
//! ```toml
//! [server]
//! address = "waypoint.example.com:9701"
//! tls = true
//! tls_skip_verify = false
//! require_auth = true
//! auth_token = "abc123"
//! ```
//!
//! Booleans missing from the file default to `false`; optional strings that
//! are `None` are left out when writing.

use serde::{Deserialize, Serialize};

/// A single named context as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Connection settings for the server this context talks to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` of the server.
    #[serde(default)]
    pub address: String,
    /// Whether to connect over TLS.
    #[serde(default)]
    pub tls: bool,
    /// Skip certificate verification.  Only meaningful with `tls`.
    #[serde(default)]
    pub tls_skip_verify: bool,
    /// Token presented to the server when `require_auth` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub require_auth: bool,
    /// Name of the platform the server runs on (e.g. `"docker"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
