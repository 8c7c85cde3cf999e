use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    error::AppError, management::SESSION_COOKIE_NAME, server::AppState, success, utils,
};

/// OAuth callback: drops the caller's old session, exchanges the code and
/// starts a new session before continuing to `/artify`.
pub async fn redirect(
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
    Extension(state): Extension<AppState>,
) -> Result<(CookieJar, Redirect), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        state.sessions.clear(cookie.value()).await;
    }

    let Some(code) = params.get("code") else {
        let reason = params
            .get("error")
            .cloned()
            .unwrap_or_else(|| "no code in callback query".to_string());
        return Err(AppError::MissingCode(reason));
    };

    let token = state.oauth.exchange_code(code, utils::now()).await?;
    let session_id = state.sessions.create(token).await;
    success!("Authentication successful");

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to("/artify")))
}
