use crate::{
    format::DEFAULT_CURRENCY_SYMBOL,
    models::Section,
    render::{RenderSettings, DEFAULT_FEATURED_LIMIT},
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_INITIAL_SECTION: &str = "home";
const CONFIG_DIR: &str = "config";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Storefront configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Application environment
    #[serde(default = "default_environment")]
    #[validate(length(min = 1))]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Symbol printed after every price
    #[serde(default = "default_currency_symbol")]
    #[validate(length(min = 1, max = 8))]
    pub currency_symbol: String,

    /// Number of products shown on the home panel
    #[serde(default = "default_featured_limit")]
    #[validate(range(min = 1, max = 32))]
    pub featured_limit: usize,

    /// Panel a new session opens on
    #[serde(default = "default_initial_section")]
    #[validate(custom = "validate_section")]
    pub initial_section: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            currency_symbol: default_currency_symbol(),
            featured_limit: default_featured_limit(),
            initial_section: default_initial_section(),
        }
    }
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENV
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Section a fresh session starts on. Falls back to home when the value
    /// was never validated.
    pub fn initial_section(&self) -> Section {
        Section::from_str(&self.initial_section).unwrap_or_default()
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            currency_symbol: self.currency_symbol.clone(),
            featured_limit: self.featured_limit,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

fn default_initial_section() -> String {
    DEFAULT_INITIAL_SECTION.to_string()
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Ok(());
    }
    let mut err = ValidationError::new("log_level");
    err.message = Some("log_level must be one of trace, debug, info, warn, error".into());
    Err(err)
}

fn validate_section(section: &str) -> Result<(), ValidationError> {
    if Section::from_str(section).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("initial_section");
    err.message =
        Some("initial_section must be one of home, catalog, cart, about, reviews, contacts".into());
    Err(err)
}

/// Initializes tracing using the provided log level as the default filter.
///
/// Output goes to stderr so rendered panels on stdout stay clean.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("minimal_shop={},storefront={}", level, level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let builder = fmt()
        .with_env_filter(EnvFilter::new(filter_directive))
        .with_writer(std::io::stderr);

    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    load_config_from(Path::new(CONFIG_DIR), &run_env())
}

/// Name of the config profile to load: `RUN_ENV`, then `APP_ENV`, then
/// `development`.
pub fn run_env() -> String {
    profile_name(env::var("RUN_ENV").ok(), env::var("APP_ENV").ok())
}

fn profile_name(run_env: Option<String>, app_env: Option<String>) -> String {
    let set = |name: &String| !name.is_empty();
    run_env
        .filter(set)
        .or_else(|| app_env.filter(set))
        .unwrap_or_else(|| DEFAULT_ENV.to_string())
}

/// Loads configuration from `config_dir` for the `run_env` profile.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!("Loading configuration for environment: {}", run_env);

    if !config_dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            config_dir.display()
        );
    }

    let config = Config::builder()
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .set_default("currency_symbol", DEFAULT_CURRENCY_SYMBOL)?
        .set_default("featured_limit", DEFAULT_FEATURED_LIMIT as i64)?
        .set_default("initial_section", DEFAULT_INITIAL_SECTION)?
        .add_source(File::from(config_dir.join("default")).required(false))
        .add_source(File::from(config_dir.join(run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = config_dir(&[]);
        let config = load_config_from(&dir.path().join("missing"), "development").unwrap();
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.currency_symbol, "₽");
        assert_eq!(config.featured_limit, 4);
        assert_eq!(config.initial_section(), Section::Home);
        assert!(config.is_development());
    }

    #[test]
    fn test_env_profile_overrides_default_file() {
        let dir = config_dir(&[
            ("default.toml", "featured_limit = 2\nlog_level = \"warn\"\n"),
            ("staging.toml", "featured_limit = 6\ninitial_section = \"catalog\"\n"),
        ]);
        let config = load_config_from(dir.path(), "staging").unwrap();
        assert_eq!(config.environment, "staging");
        assert_eq!(config.featured_limit, 6);
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.initial_section(), Section::Catalog);
        assert!(!config.is_development());
    }

    #[test]
    fn test_invalid_section_fails_validation() {
        let dir = config_dir(&[("default.toml", "initial_section = \"checkout\"\n")]);
        let result = load_config_from(dir.path(), "development");
        assert_matches!(result, Err(AppConfigError::Validation(errors)) => {
            assert!(errors.field_errors().contains_key("initial_section"));
        });
    }

    #[test]
    fn test_featured_limit_out_of_range() {
        let dir = config_dir(&[("default.toml", "featured_limit = 0\n")]);
        let result = load_config_from(dir.path(), "development");
        assert_matches!(result, Err(AppConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = config_dir(&[("default.toml", "database_url = \"sqlite://shop.db\"\n")]);
        let result = load_config_from(dir.path(), "development");
        assert_matches!(result, Err(AppConfigError::Load(_)));
    }

    #[test]
    fn test_profile_name_precedence() {
        let name = |run: Option<&str>, app: Option<&str>| {
            profile_name(run.map(String::from), app.map(String::from))
        };
        assert_eq!(name(Some("staging"), Some("production")), "staging");
        assert_eq!(name(None, Some("production")), "production");
        assert_eq!(name(None, None), "development");
        assert_eq!(name(Some(""), None), "development");
        assert_eq!(name(Some(""), Some("staging")), "staging");
    }

    #[test]
    fn test_featured_limit_default_matches_render_default() {
        let dir = config_dir(&[]);
        let config = load_config_from(dir.path(), "development").unwrap();
        assert_eq!(config.featured_limit, RenderSettings::default().featured_limit);
    }

    #[test]
    fn test_render_settings() {
        let config = AppConfig {
            currency_symbol: "руб.".into(),
            featured_limit: 8,
            ..AppConfig::default()
        };
        let settings = config.render_settings();
        assert_eq!(settings.currency_symbol, "руб.");
        assert_eq!(settings.featured_limit, 8);
        assert!(config.validate().is_ok());
    }
}
