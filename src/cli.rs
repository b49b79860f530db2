//! Command-line flags for the server binary

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::types::Variant;

#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file (overrides `ARTICLES_CONFIG`)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Behaviour of `GET /articles`: `healthy` or `faulty`
    #[arg(long, value_name = "VARIANT", conflicts_with = "faulty")]
    pub variant: Option<Variant>,

    /// Shorthand for `--variant faulty`
    #[arg(long)]
    pub faulty: bool,
}

impl Cli {
    /// Variant requested on the command line, if any.
    pub fn variant_override(&self) -> Option<Variant> {
        if self.faulty {
            Some(Variant::Faulty)
        } else {
            self.variant
        }
    }

    /// Load configuration, then let command-line flags take priority.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file {} does not exist", path.display());
                }
                AppConfig::load_from(path)?
            }
            None => AppConfig::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(variant) = self.variant_override() {
            config.api.variant = variant;
        }
    }
}
