use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::matcher::{DEFAULT_LIMIT, DEFAULT_PARALLEL_THRESHOLD};
use crate::core::ScoringRules;
use crate::models::ScoringWeights;

/// Tolerance when checking that the sub-score weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_candidates: default_max_candidates(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_max_limit() -> usize { 50 }
fn default_max_candidates() -> usize { 5000 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_technical_weight")]
    pub technical: f64,
    #[serde(default = "default_geographic_weight")]
    pub geographic: f64,
    #[serde(default = "default_personal_weight")]
    pub personal: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            technical: default_technical_weight(),
            geographic: default_geographic_weight(),
            personal: default_personal_weight(),
            availability: default_availability_weight(),
        }
    }
}

fn default_technical_weight() -> f64 { 0.40 }
fn default_geographic_weight() -> f64 { 0.25 }
fn default_personal_weight() -> f64 { 0.20 }
fn default_availability_weight() -> f64 { 0.15 }

impl WeightsConfig {
    /// Convert to scoring weights, rejecting negative values or a sum other than 1.0
    pub fn to_weights(&self) -> Result<ScoringWeights, ConfigError> {
        let weights = ScoringWeights {
            technical: self.technical,
            geographic: self.geographic,
            personal: self.personal,
            availability: self.availability,
        };

        let values = [
            weights.technical,
            weights.geographic,
            weights.personal,
            weights.availability,
        ];
        if values.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Message(format!(
                "scoring weights must be non-negative numbers, got {:?}",
                weights
            )));
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 1.0, got {}",
                sum
            )));
        }

        Ok(weights)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ORBITRUM)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ORBITRUM__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Build the scoring rule table from the configured weights
    pub fn scoring_rules(&self) -> Result<ScoringRules, ConfigError> {
        Ok(ScoringRules::with_weights(self.scoring.weights.to_weights()?))
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ORBITRUM")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
