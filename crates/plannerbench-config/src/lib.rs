//! Configuration system for PlannerBench.
//!
//! Describe a benchmark invocation (time budget, memory hint, trial count,
//! report path) in TOML or YAML instead of code.
//!
//! # Examples
//!
//! ```
//! use plannerbench_config::BenchmarkConfig;
//! use std::time::Duration;
//!
//! let config = BenchmarkConfig::from_toml_str(r#"
//!     max_time_seconds = 2.5
//!     run_count = 20
//!     output_path = "results.log"
//! "#).unwrap();
//!
//! assert_eq!(config.max_time(), Duration::from_millis(2500));
//! assert_eq!(config.run_count, 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use plannerbench_config::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::load("benchmark.toml").unwrap_or_default();
//! assert_eq!(config.run_count, 10);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of one benchmark invocation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct BenchmarkConfig {
    /// Time budget handed to each planner's solve step, in seconds.
    pub max_time_seconds: f64,

    /// Memory budget in megabytes.
    ///
    /// Advisory only: planners cannot be stopped on memory, so this is
    /// reported but never enforced.
    pub max_memory_mb: f64,

    /// Number of trials per planner.
    pub run_count: usize,

    /// Where to write the report once all planners have run.
    pub output_path: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_time_seconds: 5.0,
            max_memory_mb: 4096.0,
            run_count: 10,
            output_path: None,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the per-trial time budget in seconds.
    pub fn with_max_time_seconds(mut self, seconds: f64) -> Self {
        self.max_time_seconds = seconds;
        self
    }

    /// Sets the advisory memory budget in megabytes.
    pub fn with_max_memory_mb(mut self, megabytes: f64) -> Self {
        self.max_memory_mb = megabytes;
        self
    }

    /// Sets the number of trials per planner.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the report output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Returns the per-trial time budget.
    ///
    /// Call [`validate`](Self::validate) first; invalid budgets map to zero.
    pub fn max_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.max_time_seconds).unwrap_or(Duration::ZERO)
    }

    /// Checks that the configuration describes a runnable benchmark.
    ///
    /// # Examples
    ///
    /// ```
    /// use plannerbench_config::BenchmarkConfig;
    ///
    /// assert!(BenchmarkConfig::new().validate().is_ok());
    /// assert!(BenchmarkConfig::new().with_run_count(0).validate().is_err());
    /// assert!(BenchmarkConfig::new().with_max_time_seconds(-1.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_time_seconds.is_finite() || self.max_time_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_time_seconds must be positive, got {}",
                self.max_time_seconds
            )));
        }
        if !self.max_memory_mb.is_finite() || self.max_memory_mb < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_memory_mb must be non-negative, got {}",
                self.max_memory_mb
            )));
        }
        if self.run_count == 0 {
            return Err(ConfigError::Invalid(
                "run_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
