//! Mapping between context names and file paths.
//!
//! No I/O and no validation happens here.

use std::path::{Path, PathBuf};

use crate::domain::name::{CONTEXT_EXTENSION, DEFAULT_INDICATOR_NAME};

/// Resolves context names to files inside one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPolicy {
    dir: PathBuf,
}

impl PathPolicy {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The base directory holding every context file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<name>.hcl`
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{CONTEXT_EXTENSION}"))
    }

    /// `<dir>/_default.hcl`
    pub fn default_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_INDICATOR_NAME)
    }

    /// Recovers a context name from a path by taking its final component and
    /// dropping everything from the last `.` onward.
    pub fn name_from_path(path: &Path) -> String {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match base.rfind('.') {
            Some(i) => base[..i].to_string(),
            None => base,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_appends_extension() {
        let policy = PathPolicy::new("/home/u/.config/ctx");
        assert_eq!(
            policy.config_path("prod"),
            PathBuf::from("/home/u/.config/ctx/prod.hcl")
        );
    }

    #[test]
    fn test_default_path_is_reserved_file() {
        let policy = PathPolicy::new("/ctx");
        assert_eq!(policy.default_path(), PathBuf::from("/ctx/_default.hcl"));
    }

    #[test]
    fn test_name_from_path_strips_extension() {
        assert_eq!(PathPolicy::name_from_path(Path::new("/ctx/prod.hcl")), "prod");
    }

    #[test]
    fn test_name_from_path_strips_only_last_extension() {
        // Only the final `.` counts, so dotted names survive.
        assert_eq!(
            PathPolicy::name_from_path(Path::new("/ctx/prod.eu.hcl")),
            "prod.eu"
        );
    }

    #[test]
    fn test_name_from_path_without_dot_is_unchanged() {
        assert_eq!(PathPolicy::name_from_path(Path::new("/ctx/prod")), "prod");
    }

    #[test]
    fn test_name_from_relative_path() {
        assert_eq!(PathPolicy::name_from_path(Path::new("dev.hcl")), "dev");
    }

    #[test]
    fn test_config_path_round_trips_through_name_from_path() {
        let policy = PathPolicy::new("/ctx");
        for name in ["a", "prod", "with-dash", "v1.2"] {
            assert_eq!(PathPolicy::name_from_path(&policy.config_path(name)), name);
        }
    }
}
