use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CurrentUser, Page, Playlist, PlaylistItem,
    },
};

/// Maximum number of URIs the add-items endpoint accepts per call.
pub const ADD_TRACKS_CHUNK: usize = 100;
/// Page size used when listing playlist items.
pub const PLAYLIST_ITEMS_LIMIT: u32 = 100;
/// Page size used when listing the user's playlists.
pub const PLAYLISTS_LIMIT: u32 = 50;

/// Web API client bound to one user's access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        SpotifyClient {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    pub async fn current_user(&self) -> Result<CurrentUser, AppError> {
        self.get_json(&format!("{}/me", self.api_url)).await
    }

    /// Lists every playlist in the user's library, following `next` links.
    pub async fn playlists(&self) -> Result<Vec<Playlist>, AppError> {
        let first = format!("{}/me/playlists?limit={PLAYLISTS_LIMIT}", self.api_url);
        self.collect_pages(first).await
    }

    /// Lists every item of a playlist, following `next` links.
    pub async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, AppError> {
        let first = format!(
            "{}/playlists/{playlist_id}/tracks?limit={PLAYLIST_ITEMS_LIMIT}",
            self.api_url
        );
        self.collect_pages(first).await
    }

    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<Playlist, AppError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: String::new(),
            public,
        };

        let res = self
            .http
            .post(format!("{}/users/{user_id}/playlists", self.api_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json::<Playlist>().await?)
    }

    /// Appends `uris` to the playlist in order, [`ADD_TRACKS_CHUNK`] at a time.
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), AppError> {
        for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };

            self.http
                .post(format!("{}/playlists/{playlist_id}/tracks", self.api_url))
                .bearer_auth(&self.access_token)
                .json(&body)
                .send()
                .await?
                .error_for_status()?
                .json::<AddTrackToPlaylistResponse>()
                .await?;
        }

        Ok(())
    }

    async fn collect_pages<T: DeserializeOwned>(&self, first: String) -> Result<Vec<T>, AppError> {
        let mut items = Vec::new();
        let mut next = Some(first);

        while let Some(url) = next {
            let page: Page<T> = self.get_json(&url).await?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let res = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json::<T>().await?)
    }
}
