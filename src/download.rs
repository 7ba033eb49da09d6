use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use miette::Diagnostic;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::{
    errors::{FileOperation, IoError},
    vfs::VirtualFS,
};

/// Pixel sizes of the placeholder icons, smallest first.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Directory, relative to the extension root, the icons are written into.
pub const IMAGES_DIR: &str = "images";

#[derive(Debug, Error, Diagnostic)]
pub enum DownloadError {
    #[error("I/O error within download domain")]
    #[diagnostic(code(extgen::download::io))]
    Io(#[from] IoError),

    #[error("unable to build http client")]
    #[diagnostic(code(extgen::download::client))]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to '{url}' failed")]
    #[diagnostic(
        code(extgen::download::request),
        help("Check your network connection or pass a different --icon-source")
    )]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' responded with {status}")]
    #[diagnostic(
        code(extgen::download::status),
        help("The placeholder image service may be down, try a different --icon-source")
    )]
    Status { url: String, status: StatusCode },
}

/// One placeholder icon: its size and where it lives inside the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconAsset {
    pub size: u32,
    pub path: String,
}
impl IconAsset {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            path: format!("{}/icon{}.png", IMAGES_DIR, size),
        }
    }
    /// The placeholder service URL for this icon, `<source>/<size>`.
    pub fn url(&self, source: &str) -> String {
        format!("{}/{}", source.trim_end_matches('/'), self.size)
    }
}

/// The fixed icon set every extension gets.
pub fn icon_assets() -> Vec<IconAsset> {
    ICON_SIZES.into_iter().map(IconAsset::new).collect()
}

pub fn build_client() -> Result<Client, DownloadError> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| DownloadError::Client { source })
}

/// Downloads every remote entry of `vfs` into `root`.
///
/// All requests are in flight at the same time. The first failure resolves the whole
/// operation with that error and the remaining downloads are dropped; whatever was
/// already written stays on disk.
pub async fn fetch_icons(client: &Client, vfs: &VirtualFS, root: &Path) -> Result<(), DownloadError> {
    let downloads = vfs
        .remotes()
        .map(|(destination, url)| download_file(client, url, root.join(destination)));

    let written = try_join_all(downloads).await?;

    log::debug!(
        "downloaded {} files, {} bytes total",
        written.len(),
        written.iter().sum::<usize>()
    );

    Ok(())
}
/// Fetches `url` and writes the response body verbatim to `path`, returning the byte count.
async fn download_file(client: &Client, url: &str, path: PathBuf) -> Result<usize, DownloadError> {
    log::debug!("fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DownloadError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| DownloadError::Request {
            url: url.to_string(),
            source,
        })?;

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    log::info!("download {} ({} bytes)", path.display(), bytes.len());

    Ok(bytes.len())
}
