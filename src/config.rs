use crate::{defaults::SharedDefaults, render::Renderer, result::Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use path_macro::path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "config.toml";
const STORE_DIR_PATH: &str = "shared";
const ENV_PREFIX: &str = "CRUISE_COUNTDOWN_";
const DEFAULT_SUITE: &str = "group.com.example.interactiveMapDemo";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 15 * 60;
const MIN_REFRESH_INTERVAL_SECS: u64 = 60;
const MAX_REFRESH_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Root under which every defaults suite has its own directory.
    pub store_dir: PathBuf,
    /// Name of the suite the host application publishes into.
    pub suite: String,
    /// Shortest time between two polls of the `watch` loop.
    pub refresh_interval_secs: u64,
    /// strftime pattern for the departure date.
    pub date_format: String,
}

impl Config {
    pub fn default_for(config_dir: &Path) -> Self {
        Self {
            store_dir: path![config_dir / STORE_DIR_PATH],
            suite: DEFAULT_SUITE.into(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            date_format: crate::render::DEFAULT_DATE_FORMAT.into(),
        }
    }

    /// Defaults, then `<config_dir>/config.toml`, then `CRUISE_COUNTDOWN_*`
    /// environment variables.
    pub fn figment(config_dir: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default_for(config_dir)))
            .merge(Toml::file(path![config_dir / CONFIG_PATH]))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(config_dir: &Path) -> Result<Self> {
        Ok(Self::figment(config_dir).extract()?)
    }

    /// Kept between one minute and one week.
    pub fn refresh_interval(&self) -> chrono::Duration {
        let secs = self
            .refresh_interval_secs
            .clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS);
        chrono::Duration::seconds(secs as i64)
    }

    pub fn shared_defaults(&self) -> Result<SharedDefaults> {
        SharedDefaults::open(&self.store_dir, &self.suite)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::with_date_format(&self.date_format)
    }
}
