use std::sync::Arc;

use crate::{
    config::{AppConfig, ToursBackend},
    db,
    error::{AppError, AppResult},
    models::{settings::AdminSettings, telegram::TelegramConfig},
    notify::TelegramDispatcher,
    stores::{
        json_file::JsonFile, local_uploads::LocalUploads, site_api::SiteApi,
        sqlite_tours::SqliteTourStore, ContentStore, TourStore, TourTypeStore, UploadSink,
    },
};

/// Everything handlers need, cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tours: Arc<dyn TourStore>,
    pub tour_types: Arc<dyn TourTypeStore>,
    pub content: Arc<dyn ContentStore>,
    pub uploads: Arc<dyn UploadSink>,
    pub telegram_config: Arc<JsonFile<TelegramConfig>>,
    pub settings: Arc<JsonFile<AdminSettings>>,
    pub telegram: TelegramDispatcher,
}

impl AppState {
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client: {e}")))?;

        let site = Arc::new(SiteApi::new(
            http.clone(),
            config.site_api_base.clone(),
            config.site_admin_user.clone(),
            config.site_admin_pass.clone(),
        ));

        let (tours, uploads): (Arc<dyn TourStore>, Arc<dyn UploadSink>) =
            match config.tours_backend {
                ToursBackend::Remote => {
                    let tours: Arc<dyn TourStore> = site.clone();
                    let uploads: Arc<dyn UploadSink> = site.clone();
                    (tours, uploads)
                }
                ToursBackend::Local => {
                    tokio::fs::create_dir_all(&config.data_dir).await?;
                    let pool = db::init_db(&config.database_url).await?;
                    tracing::info!(url = %config.database_url, "local tours database ready");
                    let tours: Arc<dyn TourStore> = Arc::new(SqliteTourStore::new(pool));
                    let uploads: Arc<dyn UploadSink> =
                        Arc::new(LocalUploads::new(config.upload_dir.clone()));
                    (tours, uploads)
                }
            };

        Ok(Self {
            telegram_config: Arc::new(JsonFile::new(config.telegram_config_path())),
            settings: Arc::new(JsonFile::new(config.settings_path())),
            telegram: TelegramDispatcher::new(http, config.telegram_api_base.clone()),
            tour_types: site.clone(),
            content: site,
            tours,
            uploads,
            config: Arc::new(config),
        })
    }
}
