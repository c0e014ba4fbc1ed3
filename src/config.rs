//! Configuration loading for lexi.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. User config (`~/.lexi/config.toml`)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The system runs with sensible defaults
//! when no config exists.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LexiError, Result};

/// Default number of correct reviews that count as "meeting the day".
///
/// Used both as the today-queue size and the streak threshold.
pub const DEFAULT_DAILY_GOAL: u32 = 10;

/// Main configuration struct for lexi.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Daily review goal (today-queue size and streak threshold).
    pub daily_goal: u32,
    /// Chat completion endpoint configuration.
    pub chat: ChatConfig,
    /// Translation endpoint configuration.
    pub translate: TranslateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
            chat: ChatConfig::default(),
            translate: TranslateConfig::default(),
        }
    }
}

/// Chat completion endpoint configuration.
///
/// The API key is deliberately not a config-file field: it comes only from
/// the `OPENROUTER_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Chat completions URL.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            model: "deepseek/deepseek-r1:free".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Translation endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslateConfig {
    /// Mobile translate page URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.google.com/m".to_string(),
            timeout_secs: 20,
        }
    }
}

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// Any failure (missing file, bad TOML) degrades to the lower layers;
    /// this never errors.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = user_config;
        }

        config.apply_env_overrides();
        config
    }

    /// Load user config from `<lexi_home>/config.toml`.
    fn load_user_config() -> Option<Config> {
        let home = lexi_home()?;
        let config_path = home.join("config.toml");
        Self::load_from_file(&config_path).ok()
    }

    /// Load config from a specific file path.
    fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| LexiError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| LexiError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("LEXI_DAILY_GOAL") {
            match val.parse::<u32>() {
                Ok(n) => self.daily_goal = n,
                Err(_) => eprintln!(
                    "Warning: Invalid LEXI_DAILY_GOAL value '{}'. \
                    Expected a non-negative integer. Using '{}'.",
                    val, self.daily_goal
                ),
            }
        }

        if let Ok(val) = env::var("LEXI_CHAT_MODEL") {
            if val.trim().is_empty() {
                eprintln!("Warning: LEXI_CHAT_MODEL is empty, ignoring.");
            } else {
                self.chat.model = val;
            }
        }

        if let Ok(val) = env::var("LEXI_CHAT_ENDPOINT") {
            if val.trim().is_empty() {
                eprintln!("Warning: LEXI_CHAT_ENDPOINT is empty, ignoring.");
            } else {
                self.chat.endpoint = val;
            }
        }
    }
}

/// Get the lexi home directory.
///
/// Checks the `LEXI_HOME` environment variable first, then falls back to
/// `~/.lexi`.
pub fn lexi_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("LEXI_HOME") {
        if home.is_empty() {
            tracing::warn!("LEXI_HOME is empty, using default");
        } else {
            let path = PathBuf::from(&home);
            if path.is_absolute() {
                return Some(path);
            }
            if let Ok(canonical) = path.canonicalize() {
                return Some(canonical);
            }
            tracing::warn!("LEXI_HOME is relative and doesn't exist, using as-is");
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return Some(home.join(".lexi"));
    }

    // Fallback for containerized/minimal environments without HOME
    let fallback_path = fallback_lexi_home();
    tracing::warn!(
        "HOME not set, using fallback location: {}",
        fallback_path.display()
    );
    Some(fallback_path)
}

/// Get fallback lexi home path when HOME is unavailable.
#[cfg(unix)]
fn fallback_lexi_home() -> PathBuf {
    use std::os::unix::fs::MetadataExt;
    let uid = std::fs::metadata("/").map(|m| m.uid()).unwrap_or(0);
    PathBuf::from(format!("/tmp/lexi-{}", uid))
}

/// Get fallback lexi home path when HOME is unavailable.
#[cfg(not(unix))]
fn fallback_lexi_home() -> PathBuf {
    std::env::temp_dir().join("lexi")
}

/// Get the word collection file path.
///
/// Returns `<lexi_home>/words.json`.
pub fn words_path() -> Option<PathBuf> {
    lexi_home().map(|h| h.join("words.json"))
}

/// Get the review ledger file path.
///
/// Returns `<lexi_home>/history.json`.
pub fn history_path() -> Option<PathBuf> {
    lexi_home().map(|h| h.join("history.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.daily_goal, 10);
        assert_eq!(
            config.chat.endpoint,
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(config.chat.model, "deepseek/deepseek-r1:free");
        assert_eq!(config.chat.timeout_secs, 30);
        assert_eq!(config.translate.endpoint, "https://translate.google.com/m");
        assert_eq!(config.translate.timeout_secs, 20);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        let toml_content = r#"
daily_goal = 25

[chat]
model = "qwen/qwen-2.5:free"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(config.daily_goal, 25);
        assert_eq!(config.chat.model, "qwen/qwen-2.5:free");
        // Unspecified fields keep defaults
        assert_eq!(config.chat.timeout_secs, 30);
        assert_eq!(config.translate.timeout_secs, 20);
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = Config::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_daily_goal() {
        env::set_var("LEXI_DAILY_GOAL", "3");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.daily_goal, 3);

        env::remove_var("LEXI_DAILY_GOAL");
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_daily_goal_ignored() {
        env::set_var("LEXI_DAILY_GOAL", "lots");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.daily_goal, DEFAULT_DAILY_GOAL);

        env::remove_var("LEXI_DAILY_GOAL");
    }

    #[test]
    #[serial]
    fn test_env_var_chat_overrides() {
        env::set_var("LEXI_CHAT_MODEL", "mistral/mistral-7b");
        env::set_var("LEXI_CHAT_ENDPOINT", "https://example.test/v1/chat");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.chat.model, "mistral/mistral-7b");
        assert_eq!(config.chat.endpoint, "https://example.test/v1/chat");

        env::remove_var("LEXI_CHAT_MODEL");
        env::remove_var("LEXI_CHAT_ENDPOINT");
    }

    #[test]
    #[serial]
    fn test_env_var_empty_chat_model_ignored() {
        env::set_var("LEXI_CHAT_MODEL", "");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.chat.model, ChatConfig::default().model);

        env::remove_var("LEXI_CHAT_MODEL");
    }

    #[test]
    #[serial]
    fn test_lexi_home_with_env() {
        let dir = TempDir::new().unwrap();
        env::set_var("LEXI_HOME", dir.path().to_str().unwrap());

        let home = lexi_home().unwrap();
        assert_eq!(home, dir.path());

        env::remove_var("LEXI_HOME");
    }

    #[test]
    #[serial]
    fn test_lexi_home_fallback() {
        env::remove_var("LEXI_HOME");

        let home = lexi_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".lexi"));
    }

    #[test]
    #[serial]
    fn test_lexi_home_empty_env() {
        env::set_var("LEXI_HOME", "");

        let home = lexi_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".lexi"));

        env::remove_var("LEXI_HOME");
    }

    #[test]
    #[serial]
    fn test_data_paths() {
        let dir = TempDir::new().unwrap();
        env::set_var("LEXI_HOME", dir.path().to_str().unwrap());

        assert_eq!(words_path().unwrap(), dir.path().join("words.json"));
        assert_eq!(history_path().unwrap(), dir.path().join("history.json"));

        env::remove_var("LEXI_HOME");
    }

    #[test]
    #[serial]
    fn test_load_never_errors() {
        env::remove_var("LEXI_HOME");
        env::remove_var("LEXI_DAILY_GOAL");

        let config = Config::load();
        assert_eq!(config.daily_goal, DEFAULT_DAILY_GOAL);
    }

    #[test]
    fn test_full_toml_roundtrip() {
        let config = Config {
            daily_goal: 5,
            chat: ChatConfig {
                endpoint: "https://example.test/v1/chat".to_string(),
                model: "test-model".to_string(),
                timeout_secs: 10,
            },
            translate: TranslateConfig {
                endpoint: "https://example.test/m".to_string(),
                timeout_secs: 5,
            },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}
