use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{types::TokenInfo, utils};

/// Cookie carrying the server-side session id.
pub const SESSION_COOKIE_NAME: &str = "Spotify Cookie";

/// Server-side session storage, keyed by the session cookie value.
///
/// Cloning is cheap and every clone shares the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, TokenInfo>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token` under a fresh session id and returns the id.
    pub async fn create(&self, token: TokenInfo) -> String {
        let mut sessions = self.sessions.lock().await;
        let mut id = utils::generate_session_id();
        while sessions.contains_key(&id) {
            id = utils::generate_session_id();
        }
        sessions.insert(id.clone(), token);
        id
    }

    pub async fn get(&self, id: &str) -> Option<TokenInfo> {
        self.sessions.lock().await.get(id).cloned()
    }

    /// Overwrites the token of an existing session.
    ///
    /// Returns `false` when the session was cleared in the meantime; the
    /// token is not stored in that case.
    pub async fn replace(&self, id: &str, token: TokenInfo) -> bool {
        match self.sessions.lock().await.get_mut(id) {
            Some(slot) => {
                *slot = token;
                true
            }
            None => false,
        }
    }

    pub async fn clear(&self, id: &str) -> Option<TokenInfo> {
        self.sessions.lock().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
