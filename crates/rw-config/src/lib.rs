//! Configuration management for RW.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [tree]
//! root_title = "Home"
//! default_order = 99999
//!
//! [platforms]
//! path = "platforms"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override root node title.
    pub root_title: Option<String>,
    /// Override the order hint used for documents without one.
    pub default_order: Option<i64>,
    /// Override platforms subtree path.
    pub platforms_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree building configuration.
    pub tree: TreeConfig,
    /// Platform listing configuration.
    pub platforms: PlatformsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tree building configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Title of the root node when no root document exists.
    pub root_title: String,
    /// Order hint for documents without `sidebar_order`.
    pub default_order: i64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_title: "Home".to_owned(),
            default_order: 99_999,
        }
    }
}

/// Platform listing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlatformsConfig {
    /// Path of the subtree whose children are platforms.
    pub path: String,
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        Self {
            path: "platforms".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config(&cwd)),
        };
        Self::load_resolved(config_path.is_some(), discovered.as_deref(), cli_settings)
    }

    /// Load configuration, discovering `rw.toml` upwards from `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing fails or the configuration is invalid.
    pub fn load_from_dir(
        start_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = Self::discover_config(start_dir);
        Self::load_resolved(false, discovered.as_deref(), cli_settings)
    }

    fn load_resolved(
        explicit: bool,
        path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if explicit && !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root_title) = &settings.root_title {
            self.tree.root_title.clone_from(root_title);
        }
        if let Some(default_order) = settings.default_order {
            self.tree.default_order = default_order;
        }
        if let Some(platforms_path) = &settings.platforms_path {
            self.platforms.path.clone_from(platforms_path);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.tree.root_title, "tree.root_title")?;
        require_non_empty(&self.platforms.path, "platforms.path")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tree.root_title, "Home");
        assert_eq!(config.tree.default_order, 99_999);
        assert_eq!(config.platforms.path, "platforms");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tree.root_title, "Home");
        assert_eq!(config.platforms.path, "platforms");
    }

    #[test]
    fn test_parse_tree_config() {
        let toml = r#"
[tree]
root_title = "Documentation"
default_order = 1000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tree.root_title, "Documentation");
        assert_eq!(config.tree.default_order, 1000);
    }

    #[test]
    fn test_parse_partial_tree_config_keeps_defaults() {
        let toml = r#"
[tree]
root_title = "Docs"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tree.root_title, "Docs");
        assert_eq!(config.tree.default_order, 99_999);
    }

    #[test]
    fn test_parse_platforms_config() {
        let toml = r#"
[platforms]
path = "sdks"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.platforms.path, "sdks");
    }

    #[test]
    fn test_parse_invalid_type_fails() {
        let toml = r#"
[tree]
default_order = "first"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let settings = CliSettings {
            root_title: Some("Start".to_owned()),
            default_order: Some(5),
            platforms_path: None,
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.tree.root_title, "Start");
        assert_eq!(config.tree.default_order, 5);
        assert_eq!(config.platforms.path, "platforms");
    }

    #[test]
    fn test_validate_empty_root_title() {
        let mut config = Config::default();
        config.tree.root_title = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("tree.root_title"));
    }

    #[test]
    fn test_validate_empty_platforms_path() {
        let mut config = Config::default();
        config.platforms.path = String::new();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("platforms.path")
        ));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[platforms]\npath = \"sdks\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.platforms.path, "sdks");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "[tree]\nroot_title = \"File\"\n").unwrap();
        let settings = CliSettings {
            root_title: Some("Cli".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.tree.root_title, "Cli");
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rw.toml");
        std::fs::write(&path, "[tree]\nroot_title = \"\"\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_dir_discovers_parent_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rw.toml"),
            "[tree]\nroot_title = \"Discovered\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::load_from_dir(&nested, None).unwrap();

        assert_eq!(config.tree.root_title, "Discovered");
        assert_eq!(config.config_path, Some(dir.path().join("rw.toml")));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("rw.toml"), "").unwrap();
        std::fs::write(nested.join("rw.toml"), "").unwrap();

        let found = Config::discover_config(&nested);

        assert_eq!(found, Some(nested.join("rw.toml")));
    }
}
