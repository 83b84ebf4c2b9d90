//! User-level configuration for seymour
//!
//! Same schema as `seymour.toml`, read from
//! `~/.config/seymour/config.toml` (platform config dir). Project settings
//! take priority over it.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::project_config::{load_toml_config, ProjectConfig};

pub struct UserConfig;

impl UserConfig {
    /// Load the user config file, or defaults if there is none.
    ///
    /// An unreadable or malformed file is logged and ignored.
    pub fn load() -> ProjectConfig {
        match Self::user_config_path() {
            Some(path) => Self::load_from(&path),
            None => ProjectConfig::default(),
        }
    }

    fn load_from(path: &Path) -> ProjectConfig {
        if !path.exists() {
            return ProjectConfig::default();
        }
        match load_toml_config(path) {
            Ok(config) => {
                debug!("Loaded user config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                ProjectConfig::default()
            }
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("seymour").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserConfig::load_from(&dir.path().join("config.toml"));
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\ngame_mode = true\n").unwrap();
        assert!(UserConfig::load_from(&path).game_mode());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\ngame_mode = ").unwrap();
        assert_eq!(UserConfig::load_from(&path), ProjectConfig::default());
    }

    #[test]
    fn test_user_config_path_returns_some() {
        if let Some(p) = UserConfig::user_config_path() {
            assert!(p.ends_with("seymour/config.toml"));
        }
    }
}
