use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::sentinel::ObserverOptions,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Overrides `api_base_url` from the environment
pub const API_BASE_URL_ENV: &str = "CORPDIR_API_BASE_URL";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub observer: ObserverOptions,
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_page_size() -> u32 {
    crate::domain::query::DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_cache_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            api_base_url: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            observer: ObserverOptions::default(),
            cache_enabled: default_cache_enabled(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
        }
    }
}

impl Config {
    /// Built-in defaults: the embedded `config.json5`
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults, then user files in the config directory, then the environment
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("reading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        let base_url_override = std::env::var(API_BASE_URL_ENV).ok();
        cfg.merge_defaults(default_config, base_url_override)
    }

    /// Fill what the user left out from `defaults` and validate the result
    pub fn merge_defaults(
        mut self,
        defaults: Config,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }

        if let Some(url) = base_url_override.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url;
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = defaults.api_base_url;
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("api_base_url")));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Message(String::from(
                "page_size must be at least 1",
            )));
        }
        if !(self.observer.threshold > 0.0 && self.observer.threshold <= 1.0) {
            return Err(ConfigError::Message(format!(
                "observer.threshold must be in (0, 1], got {}",
                self.observer.threshold
            )));
        }

        Ok(self)
    }
}
