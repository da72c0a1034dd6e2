use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::checksum::FetchOptions;

/// Fetch timeout parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds for the package fetch.
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds; the fetch fails once exceeded.
    pub request_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 3600,
        }
    }
}

/// Global configuration loaded from `~/.config/nprov/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NprovConfig {
    /// Wi-Fi security type written into payloads when none is given.
    pub wifi_security_type: String,
    /// Whether `build` also writes the payload dump file.
    pub dump_payload: bool,
    /// Filename of the payload dump in the download directory.
    pub dump_filename: String,
    /// Optional fetch timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for NprovConfig {
    fn default() -> Self {
        Self {
            wifi_security_type: "WPA".to_string(),
            dump_payload: true,
            dump_filename: "CS_bytes.txt".to_string(),
            fetch: None,
        }
    }
}

impl NprovConfig {
    /// Timeouts for the checksum fetch, with defaults where unset.
    pub fn fetch_options(&self) -> FetchOptions {
        let fetch = self.fetch.clone().unwrap_or_default();
        FetchOptions {
            connect_timeout: Duration::from_secs(fetch.connect_timeout_secs),
            request_timeout: Duration::from_secs(fetch.request_timeout_secs),
        }
    }

    /// Where the payload dump goes: the user's download directory (or the
    /// working directory when none exists) plus the configured filename.
    /// `None` when dumping is disabled.
    pub fn dump_path(&self) -> Option<PathBuf> {
        if !self.dump_payload {
            return None;
        }
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Some(dir.join(&self.dump_filename))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nprov")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NprovConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NprovConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: NprovConfig = toml::from_str(&data)?;
    Ok(cfg)
}
