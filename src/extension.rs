use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Options, DEFAULT_LOCALE};

/// Everything the templates need to know about the extension being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionSpec {
    pub name: String,
    pub default_locale: String,
    pub description: String,
}
impl ExtensionSpec {
    /// Builds a spec from the extension name and the optional CLI values.
    ///
    /// An absent or empty locale falls back to [`DEFAULT_LOCALE`], an absent
    /// description becomes an empty string.
    pub fn new(name: impl Into<String>, options: &Options) -> Self {
        let default_locale = options
            .default_locale
            .as_deref()
            .filter(|locale| !locale.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
            .to_string();

        Self {
            name: name.into(),
            default_locale,
            description: options.description.clone().unwrap_or_default(),
        }
    }
    pub fn slug(&self) -> String {
        slug(&self.name)
    }
    /// The directory the extension is generated into, below `root`.
    pub fn target_directory(&self, root: &Path) -> PathBuf {
        root.join(self.slug())
    }
}

/// Lowercases `name` and turns every space into a hyphen.
///
/// ```
/// assert_eq!(extgen::extension::slug("My Cool Ext"), "my-cool-ext");
/// ```
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
