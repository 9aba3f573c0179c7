// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these wins:
//! 1. an explicit path handed to [`get_app_config_dir_with_override`] (tests)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. the `ICED_STATUS_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/IcedStatus` from the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedStatus";

pub const ENV_CONFIG_DIR: &str = "ICED_STATUS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls return `false`.
pub fn init_cli_overrides(config_dir: Option<PathBuf>) -> bool {
    CLI_CONFIG_DIR.set(config_dir).is_ok()
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Config directory from CLI, environment or platform default.
///
/// `None` only when the platform has no config directory and no override
/// was given.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}
