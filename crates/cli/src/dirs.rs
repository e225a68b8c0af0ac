//! Data directory resolution.

use std::path::{Path, PathBuf};

/// Picks the data directory: explicit flag, then `RIGSHEET_DATA_DIR`, then
/// `./data` when present, then the platform data directory.
///
/// Platform data directory:
/// - macOS: `~/Library/Application Support/rigsheet`
/// - Linux: `~/.local/share/rigsheet` (or `$XDG_DATA_HOME/rigsheet`)
/// - Windows: `%APPDATA%\rigsheet`
/// - Fallback: `./data`
pub fn resolve_data_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag.or(env) {
        return dir;
    }

    let local = Path::new("data");
    if local.is_dir() {
        return local.to_path_buf();
    }

    directories::ProjectDirs::from("", "", "rigsheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| local.to_path_buf())
}
