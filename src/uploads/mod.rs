use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::with_upload_context;

/// Directory-backed storage for player photos
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    upload_dir: PathBuf,
}

impl PhotoStorage {
    /// Create a new storage, making the directory if needed
    pub fn new<P: AsRef<Path>>(upload_dir: P) -> Result<Self> {
        let upload_dir = upload_dir.as_ref().to_path_buf();

        std::fs::create_dir_all(&upload_dir).context("Failed to create upload directory")?;

        Ok(Self { upload_dir })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Store photo bytes under a random name and return the stored path
    pub async fn save(&self, original_name: Option<&str>, data: &[u8]) -> Result<String> {
        let file_name = stored_file_name(Uuid::new_v4(), original_name);
        let file_path = self.upload_dir.join(file_name);

        with_upload_context(tokio::fs::write(&file_path, data).await, &file_path)?;

        info!("Saved photo ({} bytes) to {}", data.len(), file_path.display());
        Ok(file_path.display().to_string())
    }
}

fn stored_file_name(id: Uuid, original_name: Option<&str>) -> String {
    match original_name.and_then(safe_extension) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

/// Keep short alphanumeric extensions only, so client names never shape the path
fn safe_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;
    let valid = !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}
