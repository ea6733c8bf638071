// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ScraperError};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub accept: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub format: String,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub include_private: bool,
    pub include_forks: bool,
    pub include_archived: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            accept: "application/vnd.github.v3+json".to_string(),
            user_agent: "GitHub-Repo-Scraper/1.0".to_string(),
            timeout_secs: 30,
            per_page: MAX_PER_PAGE,
            token: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: "json".to_string(),
            pretty_json: true,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_private: false,
            include_forks: true,
            include_archived: false,
        }
    }
}

impl Config {
    /// Built-in defaults, then the optional TOML file, then `REPO_SCRAPER__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Config::default())
            .map_err(|e| ScraperError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("REPO_SCRAPER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ScraperError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScraperError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.per_page == 0 || self.api.per_page > MAX_PER_PAGE {
            return Err(ScraperError::Config(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ScraperError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Validator::validate_url(&self.api.base_url)?;

        Ok(())
    }
}
