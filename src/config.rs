use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::error::Error;
use crate::types::Variant;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiSection,
    pub cors: CorsSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ARTICLES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path` (skipped when missing) overlaid by
    /// `ARTICLES_*` environment variables.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ARTICLES")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let config: Self = settings.try_deserialize()?;
        config.finish()
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.finish()
    }

    fn finish(mut self) -> Result<Self> {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must be specified"));
        }
        if self.server.port == 0 {
            return Err(Error::config("server.port must be non-zero"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApiSection {
    pub variant: Variant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub enabled: bool,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
