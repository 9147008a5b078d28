/* This file is part of the YTBrowse project
*
*  Copyright (C) 2025 mini_bomba
*  
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{fs::File, io::{self, Read, Write}, path::{Path, PathBuf}, sync::RwLock, time::Duration};

use actix_web::web;
use chrono::{DateTime, Utc};
use cloneable_errors::{bail, ErrContext, ErrorContext, ResContext};
use serde::{Deserialize, Serialize};
use ytbrowse_client::{request::{DEFAULT_MAX_RESULTS, DEFAULT_REGION_CODE}, YouTubeClient, DEFAULT_BASE_URL};

use crate::{cache::ResponseCache, settings::SettingsStore};

pub type SettingsLock = web::Data<RwLock<SettingsStore>>;
pub type ClientData = web::Data<YouTubeClient>;
pub type CacheData = web::Data<ResponseCache>;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub static_content_path: PathBuf,
    pub settings_path: PathBuf,
    pub listen: ListenConfig,
    pub reqwest_timeout_secs: f64,
    #[serde(skip)]
    pub startup_timestamp: DateTime<Utc>,
    pub youtube: YouTubeConfig,
    pub enable_timings_header: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            static_content_path: PathBuf::from("./static"),
            settings_path: PathBuf::from("./settings.json"),
            listen: ListenConfig::default(),
            reqwest_timeout_secs: 20.,
            startup_timestamp: Utc::now(),
            youtube: YouTubeConfig::default(),
            enable_timings_header: false,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    pub base_url: String,
    pub region_code: String,
    /// used when a request doesn't specify `max_results`
    pub default_max_results: u32,
    /// how long successful responses are reused, 0 disables the cache
    pub cache_ttl_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            region_code: DEFAULT_REGION_CODE.to_owned(),
            default_max_results: DEFAULT_MAX_RESULTS,
            cache_ttl_secs: 300,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ListenConfig {
    pub tcp: Option<(String, u16)>,
    pub unix: Option<String>,
    pub unix_mode: Option<u32>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            tcp: Some(("127.0.0.1".to_owned(), 9393)),
            unix: None,
            unix_mode: None,
        }
    }
}

impl AppConfig {
    /// Reads the config file, writing out the defaults if it doesn't exist yet
    pub fn load_or_create(path: &Path) -> Result<AppConfig, ErrorContext> {
        let cfg = match File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                file.read_to_string(&mut contents).with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&contents).with_context(|| format!("Failed to deserialize contents of {}", path.display()))?
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let cfg = AppConfig::default();
                let serialized = toml::to_string(&cfg).context("Failed to serialize default AppConfig as TOML")?;
                let mut file = File::options().write(true).create_new(true).open(path).with_context(|| format!("Failed to create {}", path.display()))?;
                write!(file, "{serialized}").with_context(|| format!("Failed to write serialized default AppConfig to {}", path.display()))?;
                cfg
            },
            Err(e) => return Err(e.context(format!("Failed to open {}", path.display()))),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ErrorContext> {
        if self.listen.tcp.is_none() && self.listen.unix.is_none() {
            bail!("Invalid configuration - no tcp port or unix socket path specified");
        }
        self.reqwest_timeout()?;
        Ok(())
    }

    pub fn reqwest_timeout(&self) -> Result<Duration, ErrorContext> {
        match Duration::try_from_secs_f64(self.reqwest_timeout_secs) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            Ok(_) => bail!("Invalid configuration - reqwest_timeout_secs must be a positive number"),
            Err(e) => Err(e.context("Invalid configuration - reqwest_timeout_secs is not a valid duration")),
        }
    }

    pub fn build_cache(&self) -> ResponseCache {
        ResponseCache::new(Duration::from_secs(self.youtube.cache_ttl_secs))
    }

    pub fn build_client(&self) -> Result<YouTubeClient, ErrorContext> {
        let http = reqwest::Client::builder()
            .timeout(self.reqwest_timeout()?)
            .build()
            .context("Failed to build the reqwest client")?;
        Ok(YouTubeClient::new(http)
            .with_base_url(&self.youtube.base_url).context("Invalid youtube.base_url")?
            .with_region_code(&self.youtube.region_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config() {
        let cfg: AppConfig = toml::from_str("
            enable_timings_header = true

            [youtube]
            region_code = \"GB\"
        ").unwrap();
        assert!(cfg.enable_timings_header);
        assert_eq!(cfg.youtube.region_code, "GB");
        assert_eq!(cfg.youtube.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.youtube.default_max_results, 20);
        assert_eq!(cfg.youtube.cache_ttl_secs, 300);
        assert_eq!(cfg.listen.tcp, Some(("127.0.0.1".to_owned(), 9393)));
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_missing_listeners() {
        let cfg: AppConfig = toml::from_str("
            [listen]
        ").unwrap();
        assert!(cfg.validate().is_err());

        let cfg: AppConfig = toml::from_str("reqwest_timeout_secs = 0.0").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_unrepresentable_timeouts() {
        for secs in [1e30, -1., f64::NAN, f64::INFINITY] {
            let cfg = AppConfig { reqwest_timeout_secs: secs, ..AppConfig::default() };
            assert!(cfg.validate().is_err(), "{secs} should be rejected");
            assert!(cfg.build_client().is_err(), "{secs} should be rejected");
        }
        let cfg = AppConfig { reqwest_timeout_secs: 2.5, ..AppConfig::default() };
        assert_eq!(cfg.reqwest_timeout().unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let created = AppConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        let loaded = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded.settings_path, created.settings_path);
        assert_eq!(loaded.youtube.region_code, "US");
    }

    #[test]
    fn builds_client() {
        let mut cfg = AppConfig::default();
        cfg.youtube.region_code = "FI".to_owned();
        let client = cfg.build_client().unwrap();
        assert_eq!(client.region_code(), "FI");
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);

        cfg.youtube.base_url = "not a url".to_owned();
        assert!(cfg.build_client().is_err());
    }
}
