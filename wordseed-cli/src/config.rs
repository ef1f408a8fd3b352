use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wordseed_types::language::Language;
use wordseed_types::primitives::Strength;

use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "wordseed.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordseedConfig {
    pub mnemonic: MnemonicConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Built-in word list: "english", "french", "japanese", ...
    pub language: Language,
    /// Entropy size in bits: 128, 160, 192, 224 or 256.
    pub strength: Strength,
    /// Custom word list file (one word per line). Overrides `language`.
    pub wordlist_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl WordseedConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: WordseedConfig =
            toml::from_str(&contents).map_err(|e| CliError::ConfigError {
                reason: format!("failed to parse config file '{}': {}", path, e),
            })?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the default file if it exists,
    /// otherwise built-in defaults.
    pub fn resolve(path: Option<&str>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Write a default configuration file into `dir`, refusing to overwrite.
    pub fn init(dir: &str) -> Result<PathBuf, CliError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config_path = dir_path.join(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            return Err(CliError::ConfigError {
                reason: format!("'{}' already exists", config_path.display()),
            });
        }

        let config = WordseedConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;
        std::fs::write(&config_path, toml_str)?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordseedConfig::default();
        assert_eq!(config.mnemonic.language, Language::English);
        assert_eq!(config.mnemonic.strength, Strength::Bits256);
        assert!(config.mnemonic.wordlist_path.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config: WordseedConfig = toml::from_str(
            r#"
            [mnemonic]
            language = "spanish"
            strength = 128
            wordlist_path = "/tmp/words.txt"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.mnemonic.language, Language::Spanish);
        assert_eq!(config.mnemonic.strength, Strength::Bits128);
        assert_eq!(
            config.mnemonic.wordlist_path.as_deref(),
            Some("/tmp/words.txt")
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WordseedConfig = toml::from_str("[mnemonic]\nstrength = 192\n").unwrap();
        assert_eq!(config.mnemonic.strength, Strength::Bits192);
        assert_eq!(config.mnemonic.language, Language::English);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_strength_rejected() {
        let result: Result<WordseedConfig, _> = toml::from_str("[mnemonic]\nstrength = 100\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result: Result<WordseedConfig, _> =
            toml::from_str("[mnemonic]\nlanguage = \"elvish\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_init_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let path = WordseedConfig::init(dir_str).unwrap();
        let loaded = WordseedConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, WordseedConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        WordseedConfig::init(dir_str).unwrap();
        let err = WordseedConfig::init(dir_str).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = WordseedConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(WordseedConfig::resolve(Some(path.to_str().unwrap())).is_err());
    }
}
