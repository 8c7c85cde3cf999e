//! Artify Library
//!
//! This library logs a user into Spotify, reads one of their playlists and
//! writes the tracks into a companion playlist ordered by the dominant color
//! of each track's cover art.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers (`login`, `redirect`, `artify`, `health`)
//! - `color` - Dominant color extraction and the HSV sort key
//! - `config` - Configuration management and environment variables
//! - `error` - Request level error type
//! - `management` - Server-side session and token handling
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify OAuth and Web API clients
//! - `sync` - The playlist reordering itself
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod color;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

/// A convenient Result type alias for startup operations that may fail.
///
/// Request handling uses [`error::AppError`] instead; this alias covers
/// configuration loading and server bootstrap where any error is fatal.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures. Request handlers must return
/// [`error::AppError`] instead so the server keeps running.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a failed upstream call that is
/// reported back to the browser as an error page.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
