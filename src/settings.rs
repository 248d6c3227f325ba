use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::{DEFAULT_FEED_URL, DEFAULT_PORT};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub feed_url: String,
    pub port: u16,
    pub auto_open_browser: bool,
    /// When set, write a standalone page here instead of serving
    pub export_html: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            port: DEFAULT_PORT,
            auto_open_browser: false,
            export_html: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        Ok(Self::from_ini_str(&content))
    }

    /// Parses `key = value` lines. Unknown keys and unparsable values are
    /// ignored and the default is kept.
    pub fn from_ini_str(content: &str) -> Self {
        let mut settings = Settings::default();
        let mut config_map = HashMap::new();

        for line in content.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().trim_matches('"').to_string());
            }
        }

        if let Some(feed_url) = config_map.get("feed_url") {
            if !feed_url.is_empty() {
                settings.feed_url = feed_url.clone();
            }
        }
        if let Some(port_str) = config_map.get("port") {
            if let Ok(port) = port_str.parse::<u16>() {
                settings.port = port;
            }
        }
        if let Some(auto_open_str) = config_map.get("auto_open_browser") {
            if let Ok(auto_open) = auto_open_str.parse::<bool>() {
                settings.auto_open_browser = auto_open;
            }
        }
        if let Some(export_html) = config_map.get("export_html") {
            if !export_html.is_empty() {
                settings.export_html = Some(export_html.clone());
            }
        }

        settings
    }

    pub fn to_ini_string(&self) -> String {
        let mut content = String::new();
        content.push_str("# QuakeMap Configuration File\n");
        content.push_str(&format!("feed_url = \"{}\"\n", self.feed_url));
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("auto_open_browser = {}\n", self.auto_open_browser));
        if let Some(ref export_html) = self.export_html {
            content.push_str(&format!("export_html = \"{}\"\n", export_html));
        }
        content
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }

        std::fs::write(&config_path, self.to_ini_string()).context("Failed to write to config file")?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("quakemap.ini");
        path
    }
}
