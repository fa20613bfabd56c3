use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{multipart, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use super::{ContentStore, TourStore, TourTypeStore, UploadFile, UploadSink};
use crate::{
    error::{AppError, AppResult},
    models::{content::SiteContent, tour::Tour, tour_type::TourTypeItem},
    utils::urls::{absolutize_path, absolutize_tree},
};

#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    #[serde(default)]
    content: Value,
}

#[derive(Debug, Deserialize)]
struct UploadReply {
    url: Option<String>,
}

/// Client for the public site's `/api/admin/*` endpoints, authenticated
/// with HTTP Basic credentials.
#[derive(Debug, Clone)]
pub struct SiteApi {
    http: reqwest::Client,
    base: String,
    user: String,
    pass: String,
}

impl SiteApi {
    pub fn new(
        http: reqwest::Client,
        base: impl Into<String>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            user: user.into(),
            pass: pass.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base, path))
            .basic_auth(&self.user, Some(&self.pass))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> AppResult<Value> {
        let response = self.request(method, path).json(body).send().await?;
        read_reply(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        let value = read_reply(response).await?;
        serde_json::from_value(value).map_err(|e| AppError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Unexpected response from {path}: {e}"),
        })
    }

    async fn delete_query(&self, path: &str, key: &str, value: &str) -> AppResult<()> {
        let response = self
            .request(Method::DELETE, path)
            .query(&[(key, value)])
            .send()
            .await?;
        read_reply(response).await.map(drop)
    }
}

/// Turns a non-success upstream answer into [`AppError::Upstream`] carrying
/// the upstream status and its `error` message when there is one.
async fn read_reply(response: Response) -> AppResult<Value> {
    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let body = response.text().await?;
    let value: Value = if body.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(&body).unwrap_or_else(|_| json!({ "raw": body }))
    };

    if status.is_success() {
        return Ok(value);
    }

    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Upstream request failed with status {}", status.as_u16()));
    Err(AppError::Upstream { status, message })
}

#[async_trait]
impl TourStore for SiteApi {
    async fn list(&self) -> AppResult<Vec<Tour>> {
        let envelope: ItemsEnvelope<Tour> = self.get("/api/admin/tours").await?;
        let mut tours = envelope.items;
        for tour in &mut tours {
            tour.absolutize_media(&self.base);
        }
        Ok(tours)
    }

    async fn create(&self, tour: &Tour) -> AppResult<()> {
        self.send_json(Method::POST, "/api/admin/tours", tour).await.map(drop)
    }

    async fn update(&self, tour: &Tour) -> AppResult<()> {
        self.send_json(Method::PUT, "/api/admin/tours", tour).await.map(drop)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.delete_query("/api/admin/tours", "id", id).await
    }
}

#[async_trait]
impl TourTypeStore for SiteApi {
    async fn list(&self) -> AppResult<Vec<TourTypeItem>> {
        let envelope: ItemsEnvelope<TourTypeItem> = self.get("/api/admin/tour-types").await?;
        Ok(envelope.items)
    }

    async fn create(&self, item: &TourTypeItem) -> AppResult<()> {
        self.send_json(Method::POST, "/api/admin/tour-types", item).await.map(drop)
    }

    async fn update(&self, item: &TourTypeItem) -> AppResult<()> {
        self.send_json(Method::PUT, "/api/admin/tour-types", item).await.map(drop)
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        self.delete_query("/api/admin/tour-types", "code", code).await
    }
}

#[async_trait]
impl ContentStore for SiteApi {
    async fn load(&self) -> AppResult<SiteContent> {
        let envelope: ContentEnvelope = self.get("/api/admin/content").await?;
        let mut tree = match envelope.content {
            Value::Null => json!({}),
            other => other,
        };
        absolutize_tree(&mut tree, &self.base);
        serde_json::from_value(tree).map_err(|e| AppError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Malformed content document: {e}"),
        })
    }

    async fn save(&self, content: &SiteContent) -> AppResult<()> {
        self.send_json(Method::PUT, "/api/admin/content", &json!({ "content": content }))
            .await
            .map(drop)
    }
}

#[async_trait]
impl UploadSink for SiteApi {
    async fn store(&self, file: UploadFile) -> AppResult<String> {
        let mut part = multipart::Part::bytes(file.data.to_vec()).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(Method::POST, "/api/admin/upload")
            .multipart(form)
            .send()
            .await?;
        let reply: UploadReply = serde_json::from_value(read_reply(response).await?)?;

        match reply.url {
            Some(url) => Ok(absolutize_path(&url, &self.base)),
            None => Err(AppError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: "Upload response had no url".to_string(),
            }),
        }
    }
}
