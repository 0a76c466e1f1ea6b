//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, warn};

use crate::error::{SchoolspaceError, SchoolspaceResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "schoolspace.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SchoolspaceResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SchoolspaceError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for w in &warnings {
                    warn!(file = %w.file.display(), key = %w.key, "unknown config key");
                }
                debug!(file = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => warn!(error = %e, "ignoring unreadable config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (SCHOOLSPACE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Unparseable values are ignored so the lower layer stays in effect.
pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(campus) = get_env("SCHOOLSPACE_CAMPUS").and_then(|v| parse_enum(&v)) {
        config.program.campus = Some(campus);
    }

    if let Some(enrollment) =
        get_env("SCHOOLSPACE_ENROLLMENT").and_then(|v| v.trim().parse::<i64>().ok())
    {
        config.program.enrollment = Some(enrollment);
    }

    if let Some(level) = get_env("SCHOOLSPACE_FLEXIBILITY").and_then(|v| parse_enum(&v)) {
        config.program.flexibility = Some(level);
    }

    if let Some(edition) = get_env("SCHOOLSPACE_CODE_EDITION").and_then(|v| parse_enum(&v)) {
        config.program.code_edition = Some(edition);
    }

    if let Some(color) = get_env("SCHOOLSPACE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            "auto" => ColorMode::Auto,
            _ => config.output.color,
        };
    }

    config
}

fn parse_enum<T: ValueEnum>(value: &str) -> Option<T> {
    T::from_str(value.trim(), true).ok()
}

/// `<config dir>/schoolspace/config.toml`, honoring XDG_CONFIG_HOME
fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("schoolspace").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "program",
        "campus",
        "enrollment",
        "flexibility",
        "class_size",
        "method",
        "cafeteria_credit",
        "code_edition",
        "net_to_gross",
        "advanced",
        "periods_per_day",
        "utilization",
        "sped_pct",
        "sped_room_cap",
        "science_config",
        "elective_rooms",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
