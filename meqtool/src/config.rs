//! Application configuration management.
//!
//! Configuration layers, lowest priority first: built-in defaults, an
//! optional TOML file named on the command line, then environment variables.

use meq_core::models::SeriesConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The application configuration; presently just the series tunables
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Sampling and tolerance settings for plot and table generation
    #[serde(default)]
    pub series: SeriesConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `MEQ_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Take 100 samples instead of 50
    /// export MEQ_SERIES__SAMPLES=100
    ///
    /// # Widen the equilibrium-row tolerance
    /// export MEQ_SERIES__TOLERANCE=0.05
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps MEQ_SERIES__SAMPLES to series.samples
        config = config.add_source(
            config::Environment::with_prefix("MEQ")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
