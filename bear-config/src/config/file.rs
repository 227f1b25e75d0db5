use std::path::{Path, PathBuf};

/// Config file names looked up when none is given, in priority order.
pub const DEFAULT_FILE_NAMES: &[&str] = &["bear.yaml", "bear.yml", "bear.toml", "bear.json"];

/// Find the first default config file in `dir`.
pub fn find_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    DEFAULT_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
