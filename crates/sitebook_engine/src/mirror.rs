use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;
use url::Url;

const WGET_ARGS: &[&str] = &[
    "--mirror",
    "--convert-links",
    "--adjust-extension",
    "--page-requisites",
    "--no-parent",
];

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
    #[error("failed to create download directory: {0}")]
    TempDir(#[source] io::Error),
    #[error("failed to launch wget: {0}")]
    Spawn(#[source] io::Error),
}

/// A mirrored copy of a remote site. The backing temporary directory is
/// removed when this is dropped, on success and failure paths alike.
#[derive(Debug)]
pub struct MirrorDir {
    dir: TempDir,
}

impl MirrorDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Consume the mirror, leaving its directory in place on disk.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

/// Mirror `url` into a fresh temporary directory by shelling out to wget.
///
/// A non-zero wget exit is tolerated: recursive mirrors routinely hit a
/// 404 on some non-essential resource and wget reports the whole run as
/// failed. Only failing to launch wget at all is an error.
pub fn mirror(url: &str) -> Result<MirrorDir, MirrorError> {
    let parsed = Url::parse(url)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(MirrorError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    let dir = tempfile::Builder::new()
        .prefix("sitebook_wget_")
        .tempdir()
        .map_err(MirrorError::TempDir)?;

    log::info!("Downloading {url} to {}", dir.path().display());
    let status = Command::new("wget")
        .args(WGET_ARGS)
        .arg(parsed.as_str())
        .arg("-P")
        .arg(dir.path())
        .status()
        .map_err(MirrorError::Spawn)?;

    if !status.success() {
        log::warn!("wget exited with {status}; continuing with partial mirror");
    }

    Ok(MirrorDir { dir })
}
