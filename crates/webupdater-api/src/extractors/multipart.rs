//! Multipart form extractor for video uploads.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use bytes::Bytes;

use webupdater_core::error::AppError;

use crate::error::ApiError;

/// The `name` + `file` form of `POST /videos/upload`.
#[derive(Debug, Clone)]
pub struct VideoUploadForm {
    /// Logical video name (`name` field).
    pub name: String,
    /// Client-side file name of the `file` field, if sent.
    pub file_name: Option<String>,
    /// Content of the `file` field.
    pub data: Bytes,
}

impl<S> FromRequest<S> for VideoUploadForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            ApiError::with_status(
                rejection.status(),
                AppError::validation(rejection.body_text()),
            )
        })?;

        let mut name: Option<String> = None;
        let mut file_name: Option<String> = None;
        let mut data: Option<Bytes> = None;

        while let Some(field) = multipart.next_field().await.map_err(field_error)? {
            let field_name = field.name().unwrap_or("").to_string();
            match field_name.as_str() {
                "name" => {
                    name = Some(field.text().await.map_err(field_error)?);
                }
                "file" => {
                    file_name = field.file_name().map(String::from);
                    data = Some(field.bytes().await.map_err(field_error)?);
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| AppError::validation("name is required"))?;
        let data = data.ok_or_else(|| AppError::validation("file is required"))?;

        Ok(Self {
            name,
            file_name,
            data,
        })
    }
}

/// Body-limit overruns keep their 413; everything else is a bad request.
fn field_error(err: MultipartError) -> ApiError {
    ApiError::with_status(
        err.status(),
        AppError::validation(format!("Multipart error: {}", err.body_text())),
    )
}
