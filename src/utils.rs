use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

pub const SESSION_ID_LENGTH: usize = 48;

/// Random alphanumeric id used as the session cookie value.
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// `Authorization` header value for client credentials on the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Name of the playlist holding the reordered tracks.
pub fn artified_name(source: &str) -> String {
    format!("{source} (Artified)")
}
