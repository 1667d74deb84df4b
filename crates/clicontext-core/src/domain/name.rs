//! Naming rules for contexts.
//!
//! A context name is a non-empty string that maps 1:1 to `<name>.hcl`.
//! Names beginning with `_` are reserved for bookkeeping files such as the
//! default indicator and are never reported as contexts.  The store does no
//! further validation: callers must pass names that are valid path
//! components.

/// Prefix marking directory entries that belong to the store itself.
pub const RESERVED_PREFIX: char = '_';

/// Extension of every context file, without the leading dot.
pub const CONTEXT_EXTENSION: &str = "hcl";

/// File name of the default indicator inside the store directory.
pub const DEFAULT_INDICATOR_NAME: &str = "_default.hcl";

/// Returns `true` if `name` falls in the reserved namespace.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}
