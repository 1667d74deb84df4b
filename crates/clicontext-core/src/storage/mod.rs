//! Storage infrastructure: the on-disk context store.
//!
//! - `path_policy` maps context names to files and back.
//! - `default_pointer` maintains the `_default.hcl` indicator.
//! - `store` is the public façade built from the two.
//! - `settings` loads the store options from a TOML file.

mod fs_util;

pub mod default_pointer;
pub mod error;
pub mod path_policy;
pub mod settings;
pub mod store;

pub use default_pointer::DefaultPointer;
pub use error::StoreError;
pub use path_policy::PathPolicy;
pub use settings::{SettingsError, StoreSettings};
pub use store::{Store, StoreOption};
