//! # Configuration
//!
//! [`WorkshopConfig`] is read from an optional TOML file, then `WORKSHOP_*` environment
//! variables override individual fields, then the result is validated. Every field has
//! a default, so an empty file (or no file) is a working configuration.
//!
//! ```toml
//! [http]
//! bind = "0.0.0.0:8080"
//!
//! [log]
//! level = "info"
//!
//! [actors]
//! buffer_size = 64
//! seed = true
//!
//! [loyalty]
//! points_per_unit = "1"
//! silver_threshold = 500
//! gold_threshold = 2000
//! redemption_value = "0.010"
//!
//! [pos]
//! tax_rate = "0"
//! max_discount_percent = "25"
//! ```
//!
//! | Variable | Field |
//! |---|---|
//! | `WORKSHOP_BIND` | `http.bind` |
//! | `WORKSHOP_LOG_LEVEL` | `log.level` |
//! | `WORKSHOP_BUFFER_SIZE` | `actors.buffer_size` |
//! | `WORKSHOP_SEED` | `actors.seed` |
//! | `WORKSHOP_TAX_RATE` | `pos.tax_rate` |

use crate::model::LoyaltyPolicy;
use crate::pos::CartSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Request channel capacity of every resource actor.
    pub buffer_size: usize,
    /// Load the bundled workshop data on start.
    pub seed: bool,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    /// Fraction of the taxable amount, e.g. `0.05`.
    pub tax_rate: Decimal,
    pub max_discount_percent: Decimal,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::ZERO,
            max_discount_percent: dec!(25),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkshopConfig {
    pub http: HttpConfig,
    pub log: LogConfig,
    pub actors: ActorConfig,
    pub loyalty: LoyaltyPolicy,
    pub pos: PosConfig,
}

fn parse_env<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv { key, value }),
    }
}

impl WorkshopConfig {
    /// File (if any), then process environment, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `WORKSHOP_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(bind) = lookup("WORKSHOP_BIND") {
            self.http.bind = bind;
        }
        if let Some(level) = lookup("WORKSHOP_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(value) = lookup("WORKSHOP_BUFFER_SIZE") {
            self.actors.buffer_size = parse_env("WORKSHOP_BUFFER_SIZE", value)?;
        }
        if let Some(value) = lookup("WORKSHOP_SEED") {
            self.actors.seed = parse_flag("WORKSHOP_SEED", value)?;
        }
        if let Some(value) = lookup("WORKSHOP_TAX_RATE") {
            self.pos.tax_rate = parse_env("WORKSHOP_TAX_RATE", value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Invalid("actors.buffer_size must be greater than 0".into()));
        }
        if self.loyalty.silver_threshold >= self.loyalty.gold_threshold {
            return Err(ConfigError::Invalid(format!(
                "loyalty thresholds must ascend: silver {} >= gold {}",
                self.loyalty.silver_threshold, self.loyalty.gold_threshold
            )));
        }
        if self.loyalty.points_per_unit < Decimal::ZERO || self.loyalty.redemption_value < Decimal::ZERO {
            return Err(ConfigError::Invalid("loyalty rates must not be negative".into()));
        }
        if self.pos.tax_rate < Decimal::ZERO || self.pos.tax_rate >= Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "pos.tax_rate must be in [0, 1), got {}",
                self.pos.tax_rate
            )));
        }
        if self.pos.max_discount_percent < Decimal::ZERO || self.pos.max_discount_percent > dec!(100) {
            return Err(ConfigError::Invalid(format!(
                "pos.max_discount_percent must be in [0, 100], got {}",
                self.pos.max_discount_percent
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.http
            .bind
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("http.bind is not an address: {}", self.http.bind)))
    }

    pub fn cart_settings(&self) -> CartSettings {
        CartSettings {
            tax_rate: self.pos.tax_rate,
            max_discount_percent: self.pos.max_discount_percent,
            loyalty: self.loyalty.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_is_the_default() {
        let config = WorkshopConfig::from_toml_str("").unwrap();
        assert_eq!(config, WorkshopConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = WorkshopConfig::from_toml_str(
            r#"
            [actors]
            buffer_size = 8

            [loyalty]
            gold_threshold = 5000
            redemption_value = "0.005"
            "#,
        )
        .unwrap();
        assert_eq!(config.actors.buffer_size, 8);
        assert!(!config.actors.seed);
        assert_eq!(config.loyalty.silver_threshold, 500);
        assert_eq!(config.loyalty.gold_threshold, 5000);
        assert_eq!(config.loyalty.redemption_value, dec!(0.005));
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WORKSHOP_BIND", "0.0.0.0:9000"),
            ("WORKSHOP_TAX_RATE", "0.05"),
            ("WORKSHOP_SEED", "yes"),
        ]);
        let mut config = WorkshopConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.http.bind, "0.0.0.0:9000");
        assert_eq!(config.pos.tax_rate, dec!(0.05));
        assert!(config.actors.seed);
    }

    #[test]
    fn bad_env_values_are_reported() {
        let mut config = WorkshopConfig::default();
        let err = config
            .apply_env(|key| (key == "WORKSHOP_BUFFER_SIZE").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "WORKSHOP_BUFFER_SIZE", .. }));
    }

    #[test]
    fn validation_rules() {
        let mut config = WorkshopConfig::default();
        config.loyalty.silver_threshold = 3000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = WorkshopConfig::default();
        config.pos.tax_rate = dec!(1);
        assert!(config.validate().is_err());

        let mut config = WorkshopConfig::default();
        config.actors.buffer_size = 0;
        assert!(config.validate().is_err());

        let mut config = WorkshopConfig::default();
        config.http.bind = "nowhere".into();
        assert!(config.validate().is_err());
    }
}
