//! Centralized path definitions for domain-monitor
//!
//! ## Config Lookup
//!
//! ```text
//! --config <PATH>                          # explicit, must exist
//! ./domain-monitor.toml                    # project-local
//! ~/.config/domain-monitor/config.toml     # user-level (XDG config dir)
//! ```
//!
//! The first existing file wins. When none exists the built-in defaults and
//! environment variables are used alone.

use std::path::{Path, PathBuf};

/// Project-local config filename
pub const LOCAL_CONFIG_FILE: &str = "domain-monitor.toml";

/// User-level config directory name
const GLOBAL_DIR: &str = "domain-monitor";

/// User-level config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project-local config file in `dir`.
#[must_use]
pub fn local_config(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Get the user-level config directory.
///
/// Returns `<config_dir>/domain-monitor/`, falling back to the home directory
/// when the platform has no config dir.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(GLOBAL_DIR)
}

/// Get the user-level config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// First existing config file among the local and user-level candidates.
#[must_use]
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    [local_config(cwd), global_config()].into_iter().find(|p| p.is_file())
}
