//! Purpose: Construction-time configuration for `Location`.
//! Exports: `LocationOptions`, `DEFAULT_MANAGER_CLASS`.
//! Role: Builder mirroring the framework defaults; tests and odd firmware override it.
//! Invariants: Default search order is macOS path, then iOS path, loaded with `RTLD_NOW`.

use std::path::PathBuf;

use crate::core::framework::default_framework_paths;

pub const DEFAULT_MANAGER_CLASS: &str = "CLLocationManager";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationOptions {
    framework_paths: Vec<PathBuf>,
    dlopen_mode: i32,
    manager_class: String,
}

impl LocationOptions {
    pub fn new() -> Self {
        Self {
            framework_paths: default_framework_paths(),
            dlopen_mode: libc::RTLD_NOW,
            manager_class: DEFAULT_MANAGER_CLASS.to_string(),
        }
    }

    /// Appends a path to the end of the search order.
    pub fn with_framework_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.framework_paths.push(path.into());
        self
    }

    /// Replaces the search order.
    pub fn with_framework_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.framework_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dlopen_mode(mut self, mode: i32) -> Self {
        self.dlopen_mode = mode;
        self
    }

    pub fn with_manager_class(mut self, name: impl Into<String>) -> Self {
        self.manager_class = name.into();
        self
    }

    pub fn framework_paths(&self) -> &[PathBuf] {
        &self.framework_paths
    }

    pub fn dlopen_mode(&self) -> i32 {
        self.dlopen_mode
    }

    pub fn manager_class(&self) -> &str {
        &self.manager_class
    }
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MANAGER_CLASS, LocationOptions};
    use crate::core::framework::{IOS_FRAMEWORK_PATH, MACOS_FRAMEWORK_PATH};
    use std::path::PathBuf;

    #[test]
    fn defaults_match_framework() {
        let options = LocationOptions::default();
        assert_eq!(
            options.framework_paths(),
            &[
                PathBuf::from(MACOS_FRAMEWORK_PATH),
                PathBuf::from(IOS_FRAMEWORK_PATH)
            ]
        );
        assert_eq!(options.dlopen_mode(), libc::RTLD_NOW);
        assert_eq!(options.manager_class(), DEFAULT_MANAGER_CLASS);
    }

    #[test]
    fn framework_path_appends() {
        let options = LocationOptions::new().with_framework_path("/opt/CoreLocation");
        assert_eq!(options.framework_paths().len(), 3);
        assert_eq!(
            options.framework_paths().last(),
            Some(&PathBuf::from("/opt/CoreLocation"))
        );
    }

    #[test]
    fn framework_paths_replace() {
        let options = LocationOptions::new().with_framework_paths(["/a", "/b"]);
        assert_eq!(
            options.framework_paths(),
            &[PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }
}
