//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod stub_transport;

use ghsearch::search::SearchResultItem;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Search response body in GitHub's shape.
pub fn items_json(users: &[(u64, &str)]) -> String {
    let items: Vec<serde_json::Value> = users
        .iter()
        .map(|(id, login)| {
            serde_json::json!({
                "id": id,
                "login": login,
                "avatar_url": format!("https://avatars.example/u/{}", id),
                "type": "User",
            })
        })
        .collect();
    serde_json::json!({ "total_count": users.len(), "items": items }).to_string()
}

/// Items matching what [`items_json`] encodes.
pub fn expected_items(users: &[(u64, &str)]) -> Vec<SearchResultItem> {
    users
        .iter()
        .map(|(id, login)| {
            SearchResultItem::new(*id, *login, format!("https://avatars.example/u/{}", id))
        })
        .collect()
}
