//! Product image storage.

use std::{
    io,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Directory uploaded product images are copied into.
#[derive(Debug, Clone)]
pub(crate) struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory if it does not exist yet.
    pub(crate) async fn ensure(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Copy a temporary upload into the directory as
    /// `<field>-<unix-millis>-<uuid>.jpg`. The copy is removed again unless
    /// the returned guard is kept.
    pub(crate) async fn store(&self, field: &str, source: &Path) -> io::Result<PendingUpload> {
        let file_name = format!(
            "{field}-{}-{}.jpg",
            Timestamp::now().as_millisecond(),
            Uuid::now_v7().simple()
        );
        let path = self.root.join(file_name);

        fs::copy(source, &path).await?;

        debug!(path = %path.display(), "stored upload");

        Ok(PendingUpload { path: Some(path) })
    }
}

/// A copied upload that has not been claimed by a persisted document yet.
#[derive(Debug)]
pub(crate) struct PendingUpload {
    path: Option<PathBuf>,
}

impl PendingUpload {
    /// Path recorded on the document.
    pub(crate) fn stored_path(&self) -> String {
        self.path
            .as_deref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Keep the file on disk.
    pub(crate) fn keep(mut self) {
        self.path = None;
    }
}

impl Drop for PendingUpload {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };

        if let Err(source) = std::fs::remove_file(&path) {
            warn!(path = %path.display(), "failed to remove orphaned upload: {source}");
        } else {
            debug!(path = %path.display(), "removed orphaned upload");
        }
    }
}
