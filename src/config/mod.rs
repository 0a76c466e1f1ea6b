//! Configuration module for Schoolspace
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCHOOLSPACE_*)
//! 3. Project config (./schoolspace.toml)
//! 4. User config (~/.config/schoolspace/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod request;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use request::load_request;
pub use types::{
    AdvancedConfig, ColorMode, Config, OutputConfig, ProgramConfig, DEFAULT_ENROLLMENT,
};
