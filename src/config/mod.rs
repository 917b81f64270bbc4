//! Shop configuration, loaded from YAML.
//!
//! ```yaml
//! buffer_size: 32
//! transition_policy: directed     # or: unrestricted
//! min_phone_digits: 10
//! seed:
//!   animals:
//!     - { name: Lamb, sizes: [Small, Medium, Large] }
//!   price_options:
//!     - { animal: Lamb, size: Medium, name: Standard, price: "480.00" }
//! ```
//!
//! Every key is optional; see [`ShopConfig::default`].

use crate::draft::DEFAULT_MIN_PHONE_DIGITS;
use crate::model::{AnimalParams, CuttingStyleParams, DeliveryDateParams};
use crate::order_actor::TransitionPolicy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming the config file read by [`ShopConfig::from_env`].
pub const CONFIG_ENV: &str = "MEAT_ORDER_CONFIG";

const DEMO_CONFIG: &str = include_str!("shop.yaml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Request channel capacity of every actor.
    pub buffer_size: usize,
    pub transition_policy: TransitionPolicy,
    /// Digits a phone number needs once everything else is stripped.
    pub min_phone_digits: usize,
    /// Catalog loaded into the actors at startup.
    pub seed: Option<SeedCatalog>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            transition_policy: TransitionPolicy::default(),
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
            seed: None,
        }
    }
}

/// Initial catalog. Price options name their animal instead of using an id,
/// since ids are only handed out when the animals are created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedCatalog {
    pub animals: Vec<AnimalParams>,
    pub cutting_styles: Vec<CuttingStyleParams>,
    pub delivery_dates: Vec<DeliveryDateParams>,
    pub price_options: Vec<SeedPriceOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPriceOption {
    /// Name of an animal in the same seed.
    pub animal: String,
    pub size: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
}

impl ShopConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled demo shop.
    pub fn demo() -> Result<Self, ConfigError> {
        Self::from_yaml_str(DEMO_CONFIG)
    }

    /// Reads the file named by `MEAT_ORDER_CONFIG`, or falls back to [`ShopConfig::demo`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!(path = ?path, "Loading config");
                Self::from_yaml_file(path)
            }
            None => {
                info!("No {CONFIG_ENV} set, using demo config");
                Self::demo()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid("buffer_size must be at least 1"));
        }
        if self.min_phone_digits == 0 {
            return Err(ConfigError::Invalid("min_phone_digits must be at least 1"));
        }
        Ok(())
    }
}
