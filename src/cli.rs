//! Command-line surface for `post-console`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug, Default)]
#[command(
    name = "post-console",
    version,
    about = "Terminal console for managing posts over a REST API",
    long_about = None
)]
pub struct Cli {
    /// API base URL, e.g. <http://localhost:2626/api>
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file (explicit path or default) and apply flag overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    /// Apply flag overrides on top of `config` and re-validate.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
