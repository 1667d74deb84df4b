//! Domain layer for clicontext.
//!
//! Pure types with no dependencies on the filesystem.  The naming rules
//! live in [`name`]; the typed context document lives in [`context`].

pub mod context;
pub mod name;

pub use context::{ContextConfig, ServerConfig};
pub use name::{is_reserved, CONTEXT_EXTENSION, DEFAULT_INDICATOR_NAME, RESERVED_PREFIX};
