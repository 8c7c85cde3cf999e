use axum::{
    Extension,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::AppError,
    info,
    management::{Authentication, SESSION_COOKIE_NAME, TokenManager},
    server::AppState,
    spotify::SpotifyClient,
    sync::{self, SyncOptions},
};

/// Runs the sync for the logged-in user and answers with a plain-text
/// outcome. Callers without a usable token are sent back to `/`.
pub async fn artify(
    jar: CookieJar,
    Extension(state): Extension<AppState>,
) -> Result<Response, AppError> {
    let session_id = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string());

    let token = match TokenManager::new(&state.sessions, &state.oauth)
        .get_token(session_id.as_deref())
        .await?
    {
        Authentication::Authenticated(token) => token,
        Authentication::Unauthenticated => {
            info!("User not logged in");
            return Ok(Redirect::to("/").into_response());
        }
    };

    let client = SpotifyClient::new(state.http.clone(), &state.config.api_url, token.access_token);
    let options = SyncOptions {
        keep_duplicates: state.config.keep_duplicates,
    };

    let outcome = sync::sync(
        &client,
        state.extractor.as_ref(),
        &state.config.source_playlist_name,
        options,
    )
    .await?;

    Ok(outcome.to_string().into_response())
}
