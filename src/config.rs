use std::path::{Path, PathBuf};

/// Directory name of the cache root under the user's cache directory
pub const APP_DIR_NAME: &str = "trivy";

/// Sub-directory of the cache root holding the vulnerability database
pub const DB_DIR_NAME: &str = "db";

/// File name of the vulnerability database
pub const DB_FILE_NAME: &str = "trivy.db";

/// Bucket holding the database metadata record
pub const METADATA_BUCKET: &str = "trivy";

/// Key of the metadata record inside [`METADATA_BUCKET`]
pub const METADATA_KEY: &str = "metadata";

/// Returns the default cache root.
/// Uses $XDG_CACHE_HOME/trivy if XDG_CACHE_HOME is set,
/// otherwise falls back to ~/.cache/trivy,
/// or ./trivy if neither is available.
pub fn cache_dir() -> PathBuf {
    cache_dir_with_env(std::env::var("XDG_CACHE_HOME").ok(), dirs::home_dir())
}

/// Returns the directory holding the database for a cache root.
pub fn db_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join(DB_DIR_NAME)
}

/// Returns the path to the database file for a cache root.
pub fn db_path(cache_dir: &Path) -> PathBuf {
    db_dir(cache_dir).join(DB_FILE_NAME)
}

fn cache_dir_with_env(xdg_cache_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let cache_dir = xdg_cache_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("."));

    cache_dir.join(APP_DIR_NAME)
}
