use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::error::AppResult;

/// A small pretty-printed JSON document on disk, created with `T::default()`
/// on first access. Read-modify-write without locking: the last save wins.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> AppResult<T> {
        self.ensure().await?;
        let raw = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn save(&self, value: &T) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn ensure(&self) -> AppResult<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "creating default settings file");
        self.save(&T::default()).await
    }
}
