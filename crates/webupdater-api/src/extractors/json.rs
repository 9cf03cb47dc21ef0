//! JSON body extractor with API-shaped rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use webupdater_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but malformed bodies are rejected with the
/// standard error body instead of plain text. The status chosen by axum
/// (400, 415 or 422) is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::with_status(
                rejection.status(),
                AppError::validation(rejection.body_text()),
            )),
        }
    }
}
