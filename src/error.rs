use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::warning;

/// Everything that can go wrong while serving a request.
///
/// Missing authentication is not an error: it is reported through
/// [`crate::management::Authentication`] and answered with a redirect.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing authorization code: {0}")]
    MissingCode(String),

    #[error("token endpoint rejected the request: {0}")]
    OAuth(String),

    #[error("spotify request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cover art could not be decoded: {0}")]
    Image(#[from] image::ImageError),

    #[error("no dominant color found: {0}")]
    Palette(String),

    #[error("track {0} has no cover art")]
    MissingArtwork(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingCode(_) => StatusCode::BAD_REQUEST,
            AppError::OAuth(_) | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::Image(_) | AppError::Palette(_) | AppError::MissingArtwork(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        warning!("{}", self);
        (status, self.to_string()).into_response()
    }
}
