use std::path::{Path, PathBuf};

use schoolspace::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Walking upward from `start`, the first directory holding
/// `schoolspace.toml` wins, then the nearest git root. Falls back to
/// `start` when neither is found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .unwrap_or(start)
        .to_path_buf()
}

/// Project root of the current working directory, when it can be read
pub(crate) fn current_project_root() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| discover_project_root(&cwd))
}
