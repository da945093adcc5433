//! Log file location and timestamp helpers.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// `$XDG_CACHE_HOME`, else `<home>/.cache`, else `.cache`.
fn cache_root(xdg_cache_home: Option<OsString>, home: Option<&Path>) -> PathBuf {
    match xdg_cache_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home.map_or_else(|| PathBuf::from(".cache"), |h| h.join(".cache")),
    }
}

/// The dotgo cache directory, created if missing.
pub(super) fn dotgo_cache_dir() -> Option<PathBuf> {
    let home = dirs::home_dir();
    let dir = cache_root(std::env::var_os("XDG_CACHE_HOME"), home.as_deref()).join("dotgo");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// `<cache>/dotgo/<command>.log`.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(dotgo_cache_dir()?.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
