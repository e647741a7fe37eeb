use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Gallery configuration (YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Site serving the manifest and the template images
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Root-relative path of the manifest on `base_url`
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Local directory holding the images, used for root-relative previews
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_manifest_path() -> String {
    "/images.json".to_string()
}

fn default_page_size() -> usize {
    crate::logic::pagination::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            manifest_path: default_manifest_path(),
            page_size: default_page_size(),
            public_dir: None,
            vim_mode: false,
            image_preview_enabled: true,
            image_protocol: default_image_protocol(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Parse a config from YAML text
    ///
    /// A page size of zero would make every page empty, so it is rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).context("Invalid config file")?;
        if config.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&config_str)
    }
}

/// Locate the config file
///
/// Order: `--config` path, `<config_dir>/memegallery/config.yaml`, then
/// `./config.yaml`. Returns `Ok(None)` when nothing is found and no explicit
/// path was given, in which case the caller uses defaults.
pub fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!(
                "Config file not found at specified path: {}\n\
                 Expected locations when --config is omitted:\n\
                 1. {} (preferred)\n\
                 2. ./config.yaml (fallback)",
                path,
                expected_config_path()
            );
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("memegallery").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn expected_config_path() -> String {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("memegallery")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/memegallery/config.yaml".to_string()
    }
}
