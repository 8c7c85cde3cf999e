use serde::{Deserialize, Serialize};

/// Remaining validity below which a token is refreshed before use.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// OAuth token bundle kept in the server-side session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_at: i64,
}

impl TokenInfo {
    /// Builds a token from a token endpoint response received at `now`.
    ///
    /// Refresh responses may omit the refresh token; `previous_refresh`
    /// is carried over in that case.
    pub fn from_response(resp: TokenResponse, now: i64, previous_refresh: Option<&str>) -> Self {
        let refresh_token = resp
            .refresh_token
            .filter(|t| !t.is_empty())
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default();

        TokenInfo {
            access_token: resp.access_token,
            refresh_token,
            token_type: resp.token_type.unwrap_or_else(|| "Bearer".to_string()),
            scope: resp.scope.unwrap_or_default(),
            expires_at: now + resp.expires_in.unwrap_or(3600),
        }
    }

    pub fn is_expiring(&self, now: i64) -> bool {
        self.expires_at - now < TOKEN_REFRESH_MARGIN_SECS
    }
}

/// Raw body of the `/api/token` endpoint for both grant types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
}

/// A playlist entry reduced to what the color sort needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackReference {
    pub uri: String,
    pub cover_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

/// Generic paging object returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub uri: String,
    pub name: Option<String>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
