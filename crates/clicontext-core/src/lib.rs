//! # clicontext-core
//!
//! Filesystem-backed store for named CLI "contexts": small configuration
//! documents identified by a human-readable name, with at most one of them
//! designated as the default.
//!
//! # Architecture overview
//!
//! - **`domain`** – Pure types with no I/O: the naming rules for contexts
//!   and the typed [`ContextConfig`] document.
//!
//! - **`codec`** – The [`Codec`] seam.  The store hands paths and sinks to a
//!   codec and never inspects the bytes itself.  [`RawCodec`] stores opaque
//!   bytes; [`TomlCodec`] stores any serde type as TOML.
//!
//! - **`storage`** – The on-disk layout.  [`PathPolicy`] maps names to
//!   files, [`DefaultPointer`] maintains `_default.hcl`, and [`Store`] is the
//!   façade that ties them together.
//!
//! ```text
//! <dir>/
//!   prod.hcl          one file per context
//!   dev.hcl
//!   _default.hcl      symlink to prod.hcl, or a plain file containing "prod"
//! ```
//!
//! # Example
//!
//! ```rust
//! use clicontext_core::{RawCodec, Store, StoreOption};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::new(RawCodec, [StoreOption::Directory(dir.path().to_path_buf())]).unwrap();
//!
//! store.set("prod", &b"address = \"prod:9701\"".to_vec()).unwrap();
//! assert_eq!(store.list().unwrap(), vec!["prod".to_string()]);
//! assert_eq!(store.default_name().unwrap().as_deref(), Some("prod"));
//! ```

pub mod codec;
pub mod domain;
pub mod storage;

pub use codec::{Codec, CodecError, RawCodec, TomlCodec};
pub use domain::context::{ContextConfig, ServerConfig};
pub use domain::name::{is_reserved, CONTEXT_EXTENSION, DEFAULT_INDICATOR_NAME, RESERVED_PREFIX};
pub use storage::default_pointer::DefaultPointer;
pub use storage::error::StoreError;
pub use storage::path_policy::PathPolicy;
pub use storage::settings::{default_context_dir, default_settings_path, SettingsError, StoreSettings};
pub use storage::store::{Store, StoreOption};
