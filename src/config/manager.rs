use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::ui::Style;

/// Source language used when neither the CLI nor the config file names one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto";

/// Connection settings in the `[libretranslate]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the LibreTranslate server.
    pub url: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ServiceConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// Language defaults in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language code.
    pub from: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/libre-tl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub libretranslate: ServiceConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the LibreTranslate server.
    pub url: String,
    /// The API key, if one is configured.
    pub api_key: Option<String>,
    /// The source language code.
    pub source_language: String,
    /// The target language code.
    pub target_language: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub url: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take precedence
/// over built-in defaults.
///
/// # Errors
///
/// Returns an error if the service URL or target language is missing.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let url = options
        .url
        .as_ref()
        .or(config_file.libretranslate.url.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'libretranslate-url'\n\n\
                 Please provide it via:\n  \
                 - CLI option: libre-tl --libretranslate-url <url> <file>\n  \
                 - Config file: url in [libretranslate] of ~/.config/libre-tl/config.toml"
            )
        })?;

    let target_language = options
        .to
        .as_ref()
        .or(config_file.defaults.to.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: libre-tl --to <lang> <file>\n  \
                 - Config file: to in [defaults] of ~/.config/libre-tl/config.toml"
            )
        })?;

    let source_language = options
        .from
        .as_ref()
        .or(config_file.defaults.from.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string());

    let api_key = config_file.libretranslate.get_api_key();

    if api_key.is_none()
        && let Some(env_var) = &config_file.libretranslate.api_key_env
    {
        crate::warn!(
            "{} {env_var} is not set, sending requests without an API key",
            Style::warning("Warning:")
        );
    }

    Ok(ResolvedConfig {
        url,
        api_key,
        source_language,
        target_language,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/libre-tl/config.toml`
    /// or `~/.config/libre-tl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Loads the config file, treating a missing file as empty configuration.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
