//! # Spotify Module
//!
//! Thin reqwest clients for the two Spotify surfaces Artify talks to.
//!
//! - [`auth`] - the accounts service: authorize URL, code exchange and
//!   token refresh (`/authorize`, `/api/token`)
//! - [`playlist`] - the Web API calls needed to read a playlist and write
//!   the reordered copy (`/me`, `/me/playlists`, `/users/{id}/playlists`,
//!   `/playlists/{id}/tracks`)
//!
//! Base URLs come from [`crate::config::Config`] so tests can point both
//! clients at a local mock server.

pub mod auth;
pub mod playlist;

pub use auth::OAuthClient;
pub use playlist::SpotifyClient;
