use anyhow::{bail, Context};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::trivia::{PageSize, QUESTIONS_PER_PAGE};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub address: String,
    pub questions_per_page: usize,
}

impl Settings {
    /// Defaults, then `trivia.{toml,json,yaml}` if present, then `TRIVIA_*` variables
    /// (a `.env` file is read into the environment first).
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::defaults()?
            .add_source(File::with_name("trivia").required(false))
            .add_source(Environment::with_prefix("TRIVIA").try_parsing(true))
            .build()
            .context("Failed to read settings")?;
        Self::from_config(config)
    }

    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("address", "0.0.0.0:5000")?
            .set_default("questions_per_page", QUESTIONS_PER_PAGE as i64)?)
    }

    fn from_config(config: Config) -> anyhow::Result<Self> {
        let settings: Settings = config
            .try_deserialize()
            .context("Settings have unexpected format")?;
        if settings.questions_per_page == 0 {
            bail!("questions_per_page should be at least 1");
        }
        Ok(settings)
    }

    pub fn page_size(&self) -> PageSize {
        PageSize(self.questions_per_page)
    }
}
