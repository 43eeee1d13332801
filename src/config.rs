//! Toolkit configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VOXLOC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use voxloc_core::sampling::DEFAULT_MAX_REDRAWS;
use voxloc_core::{SamplingEngine, SamplingOptions};

/// Main toolkit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Random sampling configuration
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Region configuration
    #[serde(default)]
    pub region: RegionConfig,
}

impl ToolkitConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VOXLOC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // VOXLOC_SAMPLING__SEED=42 -> sampling.seed = 42
        figment = figment.merge(Env::prefixed("VOXLOC_").split("__"));

        let config: Self = figment.extract()?;
        log::debug!("Loaded configuration from {}", config_dir.display());
        Ok(config)
    }

    /// Build a sampling engine from the sampling section
    pub fn sampling_engine(&self) -> SamplingEngine {
        SamplingEngine::new(self.sampling.to_sampling_options())
    }
}

/// Random sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed seed; unset means seed from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Rejected draws tolerated per non-repeating draw
    pub max_redraws: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_redraws: DEFAULT_MAX_REDRAWS,
        }
    }
}

impl SamplingConfig {
    /// Convert to the core engine options
    pub fn to_sampling_options(&self) -> SamplingOptions {
        SamplingOptions {
            seed: self.seed,
            max_redraws: self.max_redraws,
        }
    }
}

/// Region configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Largest region (in cells) the bounded apply helpers will touch
    pub max_apply_volume: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            max_apply_volume: 1_000_000,
        }
    }
}

impl RegionConfig {
    /// Cell limit for [`voxloc_core::Region::apply_within`]
    pub fn to_apply_limit(&self) -> usize {
        self.max_apply_volume
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
