mod auth;
mod session;

pub use auth::Authentication;
pub use auth::TokenManager;
pub use session::SESSION_COOKIE_NAME;
pub use session::SessionStore;
