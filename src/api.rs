use std::path::PathBuf;

use crate::{
    config::GeneratorConfig,
    download::{self, DownloadError},
    errors::IoError,
    extension::ExtensionSpec,
    preview::preview_as_tree,
    template::{self, TemplateError},
    vfs::VirtualFS,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ExtgenError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Download(#[from] DownloadError),
}

/// Stages every directory, file and download for `spec` without touching the disk.
///
/// # Errors
///
/// Returns an [`ExtgenError`] if the locale is not a valid directory name or a template
/// fails to render.
pub fn plan(spec: &ExtensionSpec, config: &GeneratorConfig) -> Result<VirtualFS, ExtgenError> {
    Ok(template::build_vfs(spec, &config.icon_source)?)
}

/// Prints the tree [`generate`] would create and returns the target directory.
pub fn preview(spec: &ExtensionSpec, config: &GeneratorConfig) -> Result<PathBuf, ExtgenError> {
    let destination = spec.target_directory(&config.root);
    let vfs = plan(spec, config)?;

    preview_as_tree(&vfs, &destination);

    Ok(destination)
}

/// Generates the extension skeleton for `spec` below `config.root` and downloads its icons.
///
/// Directories are created idempotently and existing files are overwritten. Files
/// already written stay in place when a later step fails.
///
/// # Errors
///
/// Returns an [`ExtgenError`] if:
///
/// - The locale is not a valid directory name or a template fails to render.
/// - A directory or file cannot be created or written to.
/// - Any icon download fails, either in transport or with a non-success status.
pub async fn generate(
    spec: &ExtensionSpec,
    config: &GeneratorConfig,
) -> Result<PathBuf, ExtgenError> {
    let destination = spec.target_directory(&config.root);

    log::debug!("generating '{}' into {}", spec.name, destination.display());

    let vfs = plan(spec, config)?;

    template::apply_vfs(&vfs, &destination)?;

    let client = download::build_client()?;
    download::fetch_icons(&client, &vfs, &destination).await?;

    Ok(destination)
}
