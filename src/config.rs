use std::path::PathBuf;

use crate::errors::{FileOperation, IoError};

/// Locale used when none (or an empty one) is given.
pub const DEFAULT_LOCALE: &str = "en";

/// Placeholder image service the icons are fetched from, one path segment per size.
pub const DEFAULT_ICON_SOURCE: &str = "https://via.placeholder.com";

/// User supplied knobs for a single extension.
///
/// Both only land in the manifest; the messages file always lives in `_locales/en`.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub default_locale: Option<String>,
    pub description: Option<String>,
}

/// Where and how the generator runs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the extension directory is created in.
    pub root: PathBuf,
    /// Base URL of the placeholder image service.
    pub icon_source: String,
}
impl GeneratorConfig {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            icon_source: DEFAULT_ICON_SOURCE.to_string(),
        }
    }
    /// Builds a config rooted at the process' current working directory.
    pub fn from_current_dir() -> Result<Self, IoError> {
        let root = std::env::current_dir()
            .map_err(|error| IoError::new(FileOperation::CurrentDir, PathBuf::from("."), error))?;

        Ok(Self::new(root))
    }
    pub fn with_icon_source(mut self, icon_source: impl Into<String>) -> Self {
        self.icon_source = icon_source.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_placeholder_service() {
        let config = GeneratorConfig::new("/tmp/somewhere");

        assert_eq!(config.root, PathBuf::from("/tmp/somewhere"));
        assert_eq!(config.icon_source, DEFAULT_ICON_SOURCE);
    }

    #[test]
    fn test_with_icon_source_overrides_default() {
        let config = GeneratorConfig::new(".").with_icon_source("http://127.0.0.1:9000");

        assert_eq!(config.icon_source, "http://127.0.0.1:9000");
    }
}
