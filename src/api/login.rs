use axum::{Extension, response::Redirect};

use crate::{error::AppError, server::AppState};

/// Sends the browser to Spotify's consent screen.
pub async fn login(Extension(state): Extension<AppState>) -> Result<Redirect, AppError> {
    let auth_url = state.oauth.authorize_url()?;
    Ok(Redirect::to(&auth_url))
}
