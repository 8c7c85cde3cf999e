#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use artify::{
    color::{ColorExtractor, Rgb},
    config::{Config, DEFAULT_SCOPE},
    error::AppError,
    types::TokenInfo,
};
use async_trait::async_trait;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

/// Base64 of `test_id:test_secret`.
pub const BASIC_AUTH: &str = "Basic dGVzdF9pZDp0ZXN0X3NlY3JldA==";

pub fn test_config(base: &str) -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        client_id: "test_id".to_string(),
        client_secret: "test_secret".to_string(),
        redirect_uri: "http://127.0.0.1:5000/redirect".to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        auth_url: format!("{base}/authorize"),
        token_url: format!("{base}/api/token"),
        api_url: base.to_string(),
        source_playlist_name: "Test".to_string(),
        keep_duplicates: false,
    }
}

pub fn token(access: &str, refresh: &str, expires_at: i64) -> TokenInfo {
    TokenInfo {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        token_type: "Bearer".to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        expires_at,
    }
}

/// Returns a fixed color per cover url and records every lookup.
#[derive(Default)]
pub struct FakeExtractor {
    colors: HashMap<String, Rgb>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeExtractor {
    pub fn new(colors: &[(&str, (u8, u8, u8))]) -> Self {
        FakeExtractor {
            colors: colors
                .iter()
                .map(|(url, rgb)| (url.to_string(), Rgb::from(*rgb)))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ColorExtractor for FakeExtractor {
    async fn dominant_color(&self, url: &str) -> Result<Rgb, AppError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.colors
            .get(url)
            .copied()
            .ok_or_else(|| AppError::Palette(format!("no fake color for {url}")))
    }
}

pub fn playlist(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn item(uri: &str, cover: &str) -> Value {
    json!({
        "track": {
            "uri": uri,
            "name": uri,
            "album": {
                "name": "album",
                "images": [
                    { "url": cover, "height": 640, "width": 640 },
                    { "url": format!("{cover}-small"), "height": 64, "width": 64 }
                ]
            }
        }
    })
}

pub fn page(items: Vec<Value>) -> String {
    json!({ "items": items, "next": null, "total": items.len() }).to_string()
}

pub async fn mock_me(server: &mut ServerGuard, user_id: &str) -> Mock {
    server
        .mock("GET", "/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "id": user_id, "display_name": "Tester" }).to_string())
        .create_async()
        .await
}

pub async fn mock_playlists(server: &mut ServerGuard, playlists: Vec<Value>) -> Mock {
    server
        .mock("GET", "/me/playlists")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page(playlists))
        .create_async()
        .await
}

pub async fn mock_items(server: &mut ServerGuard, playlist_id: &str, items: Vec<Value>) -> Mock {
    server
        .mock("GET", format!("/playlists/{playlist_id}/tracks").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page(items))
        .create_async()
        .await
}

pub async fn mock_create(server: &mut ServerGuard, user_id: &str, name: &str, new_id: &str) -> Mock {
    server
        .mock("POST", format!("/users/{user_id}/playlists").as_str())
        .match_body(Matcher::PartialJson(json!({ "name": name, "public": true })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(playlist(new_id, name).to_string())
        .create_async()
        .await
}

pub async fn mock_add(server: &mut ServerGuard, playlist_id: &str, uris: &[&str]) -> Mock {
    server
        .mock("POST", format!("/playlists/{playlist_id}/tracks").as_str())
        .match_body(Matcher::Json(json!({ "uris": uris })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({ "snapshot_id": "snap" }).to_string())
        .create_async()
        .await
}
