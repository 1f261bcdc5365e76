//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use subon_domain::error::{Error, Result};
use subon_domain::value_objects::ReactiveShape;

use crate::config::{AppConfig, LoggingConfig, MarkerConfig, RewriterConfig, SchedulerConfig};
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `SUBON__REWRITER__CHANNEL_CAPACITY`)
    ///
    /// Environment keys are lowercased, so scheduler names containing
    /// uppercase letters can only be configured from the file.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_path = self.config_path.clone().or_else(Self::find_default_config_path);
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                log_config_loaded(&path, true);
            } else {
                log_config_loaded(&path, false);
            }
        }

        let env_prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&env_prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .with_context(|| format!("Failed to write config file {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    for (name, scheduler) in &config.schedulers {
        validate_scheduler_config(name, scheduler)?;
    }
    for (method, marker) in &config.markers {
        validate_marker_config(method, marker)?;
    }
    validate_rewriter_config(&config.rewriter)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_scheduler_config(name: &str, config: &SchedulerConfig) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::configuration("Scheduler name cannot be empty"));
    }
    if config.worker_threads == Some(0) {
        return Err(Error::configuration(format!(
            "Scheduler '{name}' must have at least one worker thread"
        )));
    }
    if config.thread_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(Error::configuration(format!(
            "Scheduler '{name}' thread name cannot be empty"
        )));
    }
    Ok(())
}

fn validate_marker_config(method: &str, config: &MarkerConfig) -> Result<()> {
    if method.trim().is_empty() {
        return Err(Error::configuration("Marked method name cannot be empty"));
    }
    if config.key.trim().is_empty() {
        return Err(Error::configuration(format!(
            "Marker on '{method}' must name a scheduler key"
        )));
    }
    Ok(())
}

fn validate_rewriter_config(config: &RewriterConfig) -> Result<()> {
    if config.channel_capacity == 0 {
        return Err(Error::configuration("Rewriter channel capacity cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Add a scheduler under `name`
    pub fn with_scheduler<S: Into<String>>(mut self, name: S, scheduler: SchedulerConfig) -> Self {
        self.config.schedulers.insert(name.into(), scheduler);
        self
    }

    /// Mark `method` with the scheduler `key`
    pub fn with_marker<M: Into<String>, K: Into<String>>(mut self, method: M, key: K, shape: ReactiveShape) -> Self {
        self.config
            .markers
            .insert(method.into(), MarkerConfig { key: key.into(), shape });
        self
    }

    /// Set the rewriter channel capacity
    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.config.rewriter.channel_capacity = channel_capacity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
