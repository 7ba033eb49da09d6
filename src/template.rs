use crate::{
    download::{icon_assets, IMAGES_DIR},
    errors::{FileOperation, IoError},
    extension::ExtensionSpec,
    vfs::VirtualFS,
};
use miette::Diagnostic;
use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("I/O error within template domain")]
    #[diagnostic(code(extgen::template::io))]
    Io(#[from] IoError),

    #[error("Error occurred attempting to initialize tera instance")]
    #[diagnostic(code(extgen::template::tera_instance_initialization))]
    TeraInstanceInitialization {
        #[source]
        source: tera::Error,
    },

    #[error("Error occurred attempting to render template: {name}")]
    #[diagnostic(code(extgen::template::render))]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

const LOCALES_DIR: &str = "_locales";
// messages.json always lives here, whatever default_locale the manifest declares
const MESSAGES_DIR: &str = "_locales/en";

const MANIFEST_TEMPLATE: &str = "manifest.json";
const MESSAGES_TEMPLATE: &str = "messages.json";
// the .html suffix turns on tera's autoescaping
const POPUP_TEMPLATE: &str = "popup.html";

/// Registers the built-in blueprint templates on a fresh [`Tera`] instance.
fn make_tera() -> Result<Tera, TemplateError> {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        (
            MANIFEST_TEMPLATE,
            include_str!("../blueprint/manifest.json.tera"),
        ),
        (
            MESSAGES_TEMPLATE,
            include_str!("../blueprint/messages.json.tera"),
        ),
        (POPUP_TEMPLATE, include_str!("../blueprint/popup.html.tera")),
    ])
    .map_err(|source| TemplateError::TeraInstanceInitialization { source })?;

    Ok(tera)
}
/// Makes a [`Tera`] [`Context`] object, hydrated with the extension fields and the icon set.
fn make_tera_context(spec: &ExtensionSpec) -> Context {
    let mut ctx = Context::new();

    ctx.insert("name", &spec.name);
    ctx.insert("default_locale", &spec.default_locale);
    ctx.insert("description", &spec.description);
    ctx.insert("icons", &icon_assets());

    ctx
}
fn render(tera: &Tera, name: &str, ctx: &Context) -> Result<String, TemplateError> {
    tera.render(name, ctx).map_err(|source| TemplateError::Render {
        name: name.to_string(),
        source,
    })
}
/// Renders `manifest.json`.
pub fn render_manifest(spec: &ExtensionSpec) -> Result<String, TemplateError> {
    render(&make_tera()?, MANIFEST_TEMPLATE, &make_tera_context(spec))
}
/// Renders `_locales/en/messages.json`.
pub fn render_messages(spec: &ExtensionSpec) -> Result<String, TemplateError> {
    render(&make_tera()?, MESSAGES_TEMPLATE, &make_tera_context(spec))
}
/// Renders `popup.html`.
pub fn render_popup(spec: &ExtensionSpec) -> Result<String, TemplateError> {
    render(&make_tera()?, POPUP_TEMPLATE, &make_tera_context(spec))
}
/// Builds up a [`VirtualFS`] of every directory, file and download the extension needs.
///
/// Nothing is written here; the result is a pure function of `spec` and `icon_source`.
pub fn build_vfs(spec: &ExtensionSpec, icon_source: &str) -> Result<VirtualFS, TemplateError> {
    let tera = make_tera()?;
    let ctx = make_tera_context(spec);

    let mut vfs = VirtualFS::new();

    vfs.push_directory(LOCALES_DIR);
    vfs.push_directory(MESSAGES_DIR);
    vfs.push_directory("css");
    vfs.push_directory("js");
    vfs.push_directory(IMAGES_DIR);

    vfs.push_file("manifest.json", render(&tera, MANIFEST_TEMPLATE, &ctx)?);
    vfs.push_file(
        Path::new(MESSAGES_DIR).join("messages.json"),
        render(&tera, MESSAGES_TEMPLATE, &ctx)?,
    );
    vfs.push_file("popup.html", render(&tera, POPUP_TEMPLATE, &ctx)?);
    vfs.push_file("css/popup.css", String::new());
    vfs.push_file("js/popup.js", String::new());

    for icon in icon_assets() {
        let url = icon.url(icon_source);
        vfs.push_remote(icon.path, url);
    }

    Ok(vfs)
}
/// Applies directory and file creation operations from a [`VirtualFS`].
///
/// Remote entries are left to [`crate::download::fetch_icons`].
pub fn apply_vfs(vfs: &VirtualFS, destination_root: &Path) -> Result<(), TemplateError> {
    // First create all directories
    for entry in vfs.directories() {
        create_directory(&destination_root.join(&entry.destination))?;
    }

    // Then create all files
    for (rel_dest, contents) in vfs.files() {
        let final_path = destination_root.join(rel_dest);

        if let Some(parent) = final_path.parent() {
            create_directory(parent)?;
        }

        write_file(&final_path, contents)?;
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns a [`TemplateError`] if any directory creation fails due to I/O issues.
fn create_directory(path: &Path) -> Result<(), TemplateError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}
/// Writes a file with the provided contents to the specified path, overwriting it if present.
///
/// # Errors
///
/// Returns a [`TemplateError`] if writing to the file fails due to I/O issues.
fn write_file(path: &Path, contents: &str) -> Result<(), TemplateError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    log::info!("create {}", path.display());

    Ok(())
}
