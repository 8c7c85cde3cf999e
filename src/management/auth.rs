use crate::{
    error::AppError,
    management::SessionStore,
    spotify::OAuthClient,
    success,
    types::TokenInfo,
    utils, warning,
};

/// Result of looking up the caller's token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    Authenticated(TokenInfo),
    Unauthenticated,
}

/// Resolves and refreshes the token attached to a session.
pub struct TokenManager<'a> {
    sessions: &'a SessionStore,
    oauth: &'a OAuthClient,
}

impl<'a> TokenManager<'a> {
    pub fn new(sessions: &'a SessionStore, oauth: &'a OAuthClient) -> Self {
        TokenManager { sessions, oauth }
    }

    pub async fn get_token(&self, session_id: Option<&str>) -> Result<Authentication, AppError> {
        self.get_token_at(session_id, utils::now()).await
    }

    /// Returns the session's token, refreshing it first when less than
    /// [`crate::types::TOKEN_REFRESH_MARGIN_SECS`] of validity remain at `now`.
    ///
    /// A refresh the token endpoint rejects (revoked grant, rotated client
    /// secret) drops the session and reports `Unauthenticated`, sending the
    /// user through the login again. Transport failures are returned.
    pub async fn get_token_at(
        &self,
        session_id: Option<&str>,
        now: i64,
    ) -> Result<Authentication, AppError> {
        let Some(id) = session_id else {
            return Ok(Authentication::Unauthenticated);
        };
        let Some(token) = self.sessions.get(id).await else {
            return Ok(Authentication::Unauthenticated);
        };

        if !token.is_expiring(now) {
            return Ok(Authentication::Authenticated(token));
        }

        match self.oauth.refresh(&token, now).await {
            Ok(fresh) => {
                if !self.sessions.replace(id, fresh.clone()).await {
                    return Ok(Authentication::Unauthenticated);
                }
                success!("Access token refreshed");
                Ok(Authentication::Authenticated(fresh))
            }
            Err(AppError::OAuth(reason)) => {
                warning!("Token refresh rejected, session dropped: {}", reason);
                self.sessions.clear(id).await;
                Ok(Authentication::Unauthenticated)
            }
            Err(e) => Err(e),
        }
    }
}
