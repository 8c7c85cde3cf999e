//! Configuration management for Artify.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:5000/redirect";
pub const DEFAULT_SCOPE: &str = "user-library-read playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `artify/.env` in the platform data directory:
/// - Linux: `~/.local/share/artify/.env`
/// - macOS: `~/Library/Application Support/artify/.env`
/// - Windows: `%LOCALAPPDATA%/artify/.env`
///
/// A missing file is not an error, the variables may already be exported.
///
/// # Errors
///
/// Fails when the directory cannot be created or an existing `.env` file
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artify/.env");
    path
}

/// Runtime settings shared by every request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`SERVER_ADDRESS`).
    pub server_address: String,
    /// `SPOTIFY_API_AUTH_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET`. Never logged.
    pub client_secret: String,
    /// Must match the redirect URI registered with Spotify (`SPOTIFY_API_REDIRECT_URI`).
    pub redirect_uri: String,
    /// Space separated scopes (`SPOTIFY_API_AUTH_SCOPE`).
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Name of the playlist to reorder (`ARTIFY_PLAYLIST`).
    pub source_playlist_name: String,
    /// Keep repeated tracks instead of collapsing them (`ARTIFY_KEEP_DUPLICATES`).
    pub keep_duplicates: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable, or a
    /// malformed `ARTIFY_KEEP_DUPLICATES` value.
    pub fn from_env() -> Res<Self> {
        Self::from_env_with(None)
    }

    /// Like [`Config::from_env`], with `playlist` taking precedence over
    /// `ARTIFY_PLAYLIST`.
    pub fn from_env_with(playlist: Option<String>) -> Res<Self> {
        let source_playlist_name = match playlist {
            Some(name) => name,
            None => required("ARTIFY_PLAYLIST")?,
        };

        let keep_duplicates = match env::var("ARTIFY_KEEP_DUPLICATES") {
            Ok(v) => parse_bool(&v)
                .ok_or_else(|| format!("ARTIFY_KEEP_DUPLICATES must be true or false, got {v}"))?,
            Err(_) => false,
        };

        Ok(Config {
            server_address: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL),
            source_playlist_name,
            keep_duplicates,
        })
    }
}

fn required(name: &str) -> Res<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{name} must be set").into()),
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
