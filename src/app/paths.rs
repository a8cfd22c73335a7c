// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! The first of these wins:
//! 1. a directory passed explicitly to [`get_app_config_dir_with_override`]
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. the `GALLERY_LENS_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/GalleryLens` (e.g. `~/.config/GalleryLens` on Linux)

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name below the platform config directory.
const APP_NAME: &str = "GalleryLens";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already set; ignoring");
    }
}

/// The settings directory, or `None` if the platform has no config dir.
/// `override_path` takes precedence over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME), "unexpected dir {}", path.display());
        }
    }

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        let wanted = PathBuf::from("/from/test");
        assert_eq!(
            get_app_config_dir_with_override(Some(wanted.clone())),
            Some(wanted)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        assert_eq!(
            get_app_config_dir_with_override(None),
            Some(PathBuf::from("/from/env"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        assert_ne!(get_app_config_dir_with_override(None), Some(PathBuf::new()));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
