use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{
    config::Config,
    error::AppError,
    types::{TokenInfo, TokenResponse},
    utils,
};

/// Client for Spotify's authorization-code flow.
///
/// Unlike a PKCE client this one authenticates against the token endpoint
/// with the client secret (HTTP Basic), so it must only run server side.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scope: String,
    auth_url: String,
    token_url: String,
}

impl OAuthClient {
    pub fn new(config: &Config, http: Client) -> Self {
        OAuthClient {
            http,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
        }
    }

    /// Builds the URL the browser is sent to for granting access.
    pub fn authorize_url(&self) -> Result<String, AppError> {
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
            ],
        )
        .map_err(|e| AppError::OAuth(format!("invalid authorize url {}: {e}", self.auth_url)))?;

        Ok(url.into())
    }

    /// Exchanges the authorization code from the redirect for a token pair.
    ///
    /// The code is single use; a second exchange with the same code fails
    /// with `invalid_grant`.
    pub async fn exchange_code(&self, code: &str, now: i64) -> Result<TokenInfo, AppError> {
        let resp = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .await?;

        if resp.refresh_token.as_deref().unwrap_or_default().is_empty() {
            return Err(AppError::OAuth(
                "token response did not contain a refresh token".to_string(),
            ));
        }

        Ok(TokenInfo::from_response(resp, now, None))
    }

    /// Trades the refresh token of `token` for a new access token.
    ///
    /// Spotify may or may not rotate the refresh token; when the response
    /// omits it the current one is kept.
    pub async fn refresh(&self, token: &TokenInfo, now: i64) -> Result<TokenInfo, AppError> {
        let resp = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", token.refresh_token.as_str()),
            ])
            .await?;

        Ok(TokenInfo::from_response(
            resp,
            now,
            Some(&token.refresh_token),
        ))
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, AppError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(form)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::OAuth(format!("{status}: {body}")));
        }

        Ok(res.json::<TokenResponse>().await?)
    }
}
