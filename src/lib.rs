//! Scaffolds a Chrome extension: a fixed directory layout, a manifest, a locale file,
//! a popup and three placeholder icons fetched over HTTP.
pub mod api;
pub mod config;
pub mod download;
pub mod errors;
pub mod extension;
pub mod preview;
pub mod template;
pub mod vfs;

pub use api::{generate, plan, preview, ExtgenError};
pub use config::{GeneratorConfig, Options};
pub use extension::ExtensionSpec;

/// Printed on stdout once an extension was generated.
pub const SUCCESS_MESSAGE: &str = "Chrome Extension structure created successfully!";
