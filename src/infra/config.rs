//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

/// Directory holding the per-vendor store files (created on first run).
pub fn data_dir() -> PathBuf {
    std::env::var("DATA_DIR")
        .unwrap_or_else(|_| "./data".to_string())
        .into()
}

/// Directory holding the static front-end bundle served at `/`.
pub fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| "./public".to_string())
        .into()
}

/// HTTP listen port.
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}
