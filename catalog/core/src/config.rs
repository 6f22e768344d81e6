//! TOML Configuration File Support
//!
//! Configuration for patternbook surfaces, loaded from
//! `~/.config/patternbook/config.toml`.
//!
//! # Configuration Priority
//!
//! Values are applied with the following priority (highest first):
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [catalog]
//! path = "/home/me/notes/catalog.toml"
//!
//! [defaults]
//! category = "memory"
//! pattern = "smart-pointers"
//! comparison_mode = "java"
//!
//! [display]
//! show_annotations = true
//! show_line_numbers = false
//! ```
//!
//! # Environment Variables
//!
//! - `PATTERNBOOK_CATALOG`: catalog file path
//! - `PATTERNBOOK_CATEGORY`: default category id
//! - `PATTERNBOOK_PATTERN`: default pattern id
//! - `PATTERNBOOK_MODE`: `cppModern` or `java`
//! - `PATTERNBOOK_ANNOTATIONS`: `0`/`false` hides annotations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderOptions;
use crate::selection::ComparisonMode;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[catalog]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogToml {
    /// Catalog file (`.toml` or `.json`)
    pub path: Option<PathBuf>,
}

/// `[defaults]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsToml {
    /// Category to open on start
    pub category: Option<String>,
    /// Pattern to open on start
    pub pattern: Option<String>,
    /// Initial comparison mode key
    pub comparison_mode: Option<String>,
}

/// `[display]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Show line explanations
    pub show_annotations: Option<bool>,
    /// Show line numbers in code panels
    pub show_line_numbers: Option<bool>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternbookToml {
    /// Catalog section
    pub catalog: CatalogToml,
    /// Startup defaults section
    pub defaults: DefaultsToml,
    /// Display section
    pub display: DisplayToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration for a patternbook surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Catalog file; `None` means the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Category to open on start
    pub default_category: Option<String>,
    /// Pattern to open on start
    pub default_pattern: Option<String>,
    /// Initial comparison mode
    pub comparison_mode: ComparisonMode,
    /// Show line explanations
    pub show_annotations: bool,
    /// Show line numbers
    pub show_line_numbers: bool,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_category: None,
            default_pattern: None,
            comparison_mode: ComparisonMode::CppModern,
            show_annotations: true,
            show_line_numbers: true,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl BrowserConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest-priority source that set a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Display toggles as render options
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_annotations: self.show_annotations,
            show_line_numbers: self.show_line_numbers,
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Default configuration file path
///
/// `$XDG_CONFIG_HOME/patternbook/config.toml` on Linux.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("patternbook").join("config.toml"))
}

/// Log file for the terminal surface
///
/// `$XDG_STATE_HOME/patternbook.log`, or the temp dir when there is no
/// state dir (macOS, Windows).
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("patternbook.log")
}

/// Load configuration from a specific path and the process environment
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed, or
/// validated.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<BrowserConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// # Errors
///
/// See [`load_config_from_path`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<BrowserConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = BrowserConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: PatternbookToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);

    Ok(config)
}

fn apply_toml_config(config: &mut BrowserConfig, toml: &PatternbookToml) -> Result<(), ConfigError> {
    if toml.catalog.path.is_some() {
        config.catalog_path = toml.catalog.path.clone();
    }

    if toml.defaults.category.is_some() {
        config.default_category = toml.defaults.category.clone();
    }
    if toml.defaults.pattern.is_some() {
        config.default_pattern = toml.defaults.pattern.clone();
    }
    if let Some(ref key) = toml.defaults.comparison_mode {
        config.comparison_mode = ComparisonMode::parse(key).ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "comparison_mode must be \"cppModern\" or \"java\", got {key:?}"
            ))
        })?;
    }

    if let Some(show) = toml.display.show_annotations {
        config.show_annotations = show;
    }
    if let Some(show) = toml.display.show_line_numbers {
        config.show_line_numbers = show;
    }

    Ok(())
}

fn apply_env_config<F>(config: &mut BrowserConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = env("PATTERNBOOK_CATALOG") {
        config.catalog_path = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
    if let Some(category) = env("PATTERNBOOK_CATEGORY") {
        config.category_override(&category);
        config.source = ConfigSource::Env;
    }
    if let Some(pattern) = env("PATTERNBOOK_PATTERN") {
        config.default_pattern = Some(pattern);
        config.source = ConfigSource::Env;
    }
    if let Some(key) = env("PATTERNBOOK_MODE") {
        match ComparisonMode::parse(&key) {
            Some(mode) => {
                config.comparison_mode = mode;
                config.source = ConfigSource::Env;
            }
            None => tracing::warn!(value = %key, "Ignoring invalid PATTERNBOOK_MODE"),
        }
    }
    if let Some(flag) = env("PATTERNBOOK_ANNOTATIONS") {
        config.show_annotations = flag != "0" && !flag.eq_ignore_ascii_case("false");
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// CLI overrides, applied after [`load_config_from_path`]
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Catalog path override
    pub catalog_path: Option<PathBuf>,
    /// Category override
    pub category: Option<String>,
    /// Pattern override
    pub pattern: Option<String>,
    /// Comparison mode override
    pub comparison_mode: Option<ComparisonMode>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set catalog path override
    #[must_use]
    pub fn with_catalog_path(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Set category override
    #[must_use]
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Set pattern override
    #[must_use]
    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Set comparison mode override
    #[must_use]
    pub fn with_comparison_mode(mut self, mode: ComparisonMode) -> Self {
        self.comparison_mode = Some(mode);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut BrowserConfig) {
        if self.catalog_path.is_some()
            || self.category.is_some()
            || self.pattern.is_some()
            || self.comparison_mode.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref path) = self.catalog_path {
            config.catalog_path = Some(path.clone());
        }
        if let Some(ref category) = self.category {
            config.category_override(category);
        }
        if let Some(ref pattern) = self.pattern {
            config.default_pattern = Some(pattern.clone());
        }
        if let Some(mode) = self.comparison_mode {
            config.comparison_mode = mode;
        }
    }
}

impl BrowserConfig {
    /// Set the default category and drop any default pattern from a
    /// lower-priority source
    fn category_override(&mut self, category: &str) {
        self.default_category = Some(category.to_string());
        self.default_pattern = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
