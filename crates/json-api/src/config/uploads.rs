//! Upload Config

use std::path::PathBuf;

use clap::Args;

/// Uploaded file storage settings.
#[derive(Debug, Args)]
pub struct UploadConfig {
    /// Directory product images are written to
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}
