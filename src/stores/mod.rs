//! Backing stores behind the admin endpoints.
//!
//! Content, the tour-type registry and (by default) tours live on the public
//! site and are reached through [`site_api::SiteApi`]. Tours can instead be
//! kept in a local SQLite table. Telegram settings and admin preferences are
//! small JSON files next to the database.

use async_trait::async_trait;
use axum::body::Bytes;

use crate::{
    error::AppResult,
    models::{content::SiteContent, tour::Tour, tour_type::TourTypeItem},
};

pub mod json_file;
pub mod local_uploads;
pub mod site_api;
pub mod sqlite_tours;

#[async_trait]
pub trait TourStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Tour>>;
    async fn create(&self, tour: &Tour) -> AppResult<()>;
    async fn update(&self, tour: &Tour) -> AppResult<()>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

#[async_trait]
pub trait TourTypeStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<TourTypeItem>>;
    async fn create(&self, item: &TourTypeItem) -> AppResult<()>;
    async fn update(&self, item: &TourTypeItem) -> AppResult<()>;
    async fn delete(&self, code: &str) -> AppResult<()>;
}

/// The content document is always fetched and written whole.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn load(&self) -> AppResult<SiteContent>;
    async fn save(&self, content: &SiteContent) -> AppResult<()>;
}

/// A validated image ready to be stored.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[async_trait]
pub trait UploadSink: Send + Sync {
    /// Returns the public URL of the stored file.
    async fn store(&self, file: UploadFile) -> AppResult<String>;
}
