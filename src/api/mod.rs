//! # API Module
//!
//! HTTP route handlers for the Artify web server.
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /`, redirects to Spotify's authorize URL
//! - [`redirect`] - `GET /redirect?code=...`, the OAuth callback; exchanges
//!   the code, stores the token in a fresh session and sets the
//!   `Spotify Cookie` session cookie
//! - [`artify`] - `GET /artify`, reorders the configured playlist and
//!   answers with a plain-text message, or redirects to `/` when the
//!   caller has no usable token
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! Handlers receive [`crate::server::AppState`] through an `Extension`
//! layer. Failures are returned as [`crate::error::AppError`], which
//! renders itself as a plain-text error response.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use artify::{config::Config, server::{AppState, router}};
//!
//! let app = router(AppState::new(Config::from_env()?));
//! ```

mod artify;
mod health;
mod login;
mod redirect;

pub use artify::artify;
pub use health::health;
pub use login::login;
pub use redirect::redirect;
