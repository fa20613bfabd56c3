use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use super::{UploadFile, UploadSink};
use crate::error::AppResult;

/// Writes images under `upload_dir` with a random name; they are served back
/// from `/uploads` by the router.
#[derive(Debug, Clone)]
pub struct LocalUploads {
    dir: PathBuf,
}

impl LocalUploads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl UploadSink for LocalUploads {
    async fn store(&self, file: UploadFile) -> AppResult<String> {
        fs::create_dir_all(&self.dir).await?;

        let extension = Path::new(&file.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpg")
            .to_ascii_lowercase();
        let new_filename = format!("{}.{}", Uuid::new_v4(), extension);

        fs::write(self.dir.join(&new_filename), &file.data).await?;
        tracing::info!(file = %new_filename, bytes = file.data.len(), "image stored");

        Ok(format!("/uploads/{new_filename}"))
    }
}
