use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
};
use mime::Mime;
use serde_json::json;

use crate::{error::AppError, state::AppState, stores::UploadFile};

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024; // 5MB

// Field names accepted for the image part
const FILE_FIELDS: [&str; 2] = ["file", "image"];

// POST /api/site/upload
pub async fn upload_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if !FILE_FIELDS.contains(&field_name.as_str()) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unknown.jpg").to_string();
        let content_type: Option<Mime> = field
            .content_type()
            .and_then(|ct_str| ct_str.parse::<Mime>().ok());

        if let Some(ct) = &content_type {
            if !is_allowed_image(ct) {
                return Err(AppError::Validation(
                    "Only jpg, png, webp and gif images are allowed".to_string(),
                ));
            }
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read file: {e}")))?;
        if data.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Validation("Image exceeds the 5MB limit".to_string()));
        }

        let url = state
            .uploads
            .store(UploadFile {
                file_name: file_name.clone(),
                content_type: content_type.map(|ct| ct.to_string()),
                data,
            })
            .await?;

        return Ok(Json(json!({
            "url": url,
            "original_name": file_name
        })));
    }

    Err(AppError::Validation("No 'file' field in upload".to_string()))
}

fn is_allowed_image(ct: &Mime) -> bool {
    ct.type_() == mime::IMAGE
        && matches!(ct.subtype().as_str(), "jpeg" | "png" | "webp" | "gif")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_image_types_only() {
        for ok in ["image/jpeg", "image/png", "image/webp", "image/gif"] {
            assert!(is_allowed_image(&ok.parse().unwrap()), "{ok}");
        }
        for bad in ["image/svg+xml", "application/pdf", "text/plain"] {
            assert!(!is_allowed_image(&bad.parse().unwrap()), "{bad}");
        }
    }
}
