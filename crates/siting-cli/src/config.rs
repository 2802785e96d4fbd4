//! `siting.toml` configuration.
//!
//! Values are resolved in order: command-line flag, then config file, then
//! built-in default.
//!
//! ```toml
//! tolerance = 1e-9
//!
//! [report]
//! format = "text"        # or "json"
//! output = "results.txt" # omit to print to stdout
//! dot = "town.dot"       # Graphviz diagram, optional
//! precision = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use siting_graph::{CenterConfig, DEFAULT_TOLERANCE};

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "siting.toml";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON for programmatic consumption.
    Json,
}

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub dot: Option<PathBuf>,
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            output: None,
            dot: None,
            precision: 2,
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitingConfig {
    pub tolerance: Option<f64>,
    pub report: ReportConfig,
}

impl SitingConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `siting.toml` in the working
    /// directory is used if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: SitingConfig = toml::from_str(content)?;
        if let Some(tolerance) = config.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(config)
    }

    /// Center configuration with an optional command-line override.
    pub fn center_config(&self, tolerance: Option<f64>) -> CliResult<CenterConfig> {
        let tolerance = tolerance.or(self.tolerance).unwrap_or(DEFAULT_TOLERANCE);
        validate_tolerance(tolerance)?;
        Ok(CenterConfig::new().with_tolerance(tolerance))
    }
}

fn validate_tolerance(tolerance: f64) -> CliResult<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "tolerance must be a non-negative number, got {}",
            tolerance
        )))
    }
}
