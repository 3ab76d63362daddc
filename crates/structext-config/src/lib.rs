use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use structext_engine::Heuristics;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "STRUCTEXT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heuristics: Heuristics,
}

impl Config {
    const KNOWN_KEYS: [&'static str; 1] = ["heuristics"];

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let parse_error = |source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        };
        let table: toml::Table = toml::from_str(&content).map_err(parse_error)?;
        for key in table.keys().filter(|k| !Self::KNOWN_KEYS.contains(&k.as_str())) {
            log::warn!("ignoring unknown key {key:?} in {}", config_path.display());
        }
        let config: Config = toml::from_str(&content).map_err(parse_error)?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Loads the config from [`Config::resolve_path`] with no explicit path.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::resolve_path(None))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// Default location: `~/.config/structext/config.toml`.
    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/structext");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Picks the config file: an explicit path, else `$STRUCTEXT_CONFIG`,
    /// else [`Config::config_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        Self::resolve_path_with(explicit, std::env::var(CONFIG_ENV).ok())
    }

    fn resolve_path_with(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
        if let Some(path) = explicit {
            return Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
        }
        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                let path = PathBuf::from(v);
                Self::expand_path(&path).unwrap_or(path)
            }
            None => Self::config_path(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use structext_engine::KeywordEmphasis;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/structext/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original.heuristics.sentences_per_paragraph = 3;
        original.heuristics.label_words = vec!["Recap".into()];

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config_content = r#"
[heuristics]
header_max_chars = 60

[heuristics.keyword_emphasis]
enabled = true
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        let defaults = Heuristics::default();

        assert_eq!(config.heuristics.header_max_chars, 60);
        assert_eq!(config.heuristics.label_words, defaults.label_words);
        assert_eq!(
            config.heuristics.keyword_emphasis,
            KeywordEmphasis {
                enabled: true,
                ..KeywordEmphasis::default()
            }
        );
        assert!(!config.heuristics.topic_sections.enabled);
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Config::resolve_path_with(
            Some(Path::new("/explicit/config.toml")),
            Some("/from/env.toml".into()),
        );
        assert_eq!(path, PathBuf::from("/explicit/config.toml"));
    }

    #[test]
    fn test_env_path_used_without_explicit() {
        let path = Config::resolve_path_with(None, Some("/from/env.toml".into()));
        assert_eq!(path, PathBuf::from("/from/env.toml"));
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let path = Config::resolve_path_with(None, Some("  ".into()));
        assert_eq!(path, Config::config_path());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("STRUCTEXT_TEST_DIR", "/test/env/path");
        }

        let path = PathBuf::from("$STRUCTEXT_TEST_DIR/config.toml");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/config.toml")));

        unsafe {
            env::remove_var("STRUCTEXT_TEST_DIR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let mut test_config = Config::default();
        test_config.heuristics.topic_sections.enabled = true;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[heuristics\nbroken").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { ref config_path, .. } if config_path == &config_file));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[heuristics]\nsentences_per_paragraph = \"two\"\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_file),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "theme = \"dark\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, Config::default());
    }
}
