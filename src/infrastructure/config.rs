use crate::domain::error::ProxyError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_HOST: &str = "AGENT_PROXY_HOST";
pub const ENV_PORT: &str = "AGENT_PROXY_PORT";

/// 4.5 MiB, the request body cap of typical serverless hosts
pub const DEFAULT_MAX_BODY_BYTES: usize = 4_718_592;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker threads; actix picks one per core when unset
    pub workers: Option<usize>,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnthropicConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_version: default_api_version(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Logging {
    /// `tracing` filter directive for the configured level; unknown levels mean warn
    pub fn filter_directive(&self) -> &'static str {
        match self.level.to_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

impl AnthropicConfig {
    /// The configured key, if it is non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

// Defaults
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}
fn default_base_url() -> String {
    "https://api.anthropic.com/v1".to_string()
}
fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}
fn default_max_tokens() -> u32 {
    4000
}
fn default_api_version() -> String {
    "2023-06-01".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("agent-proxy").join("config.toml"))
}

/// Load config from `path` (or the default location), falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ProxyError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => get_config_path(),
    };

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn parse_config(content: &str) -> Result<Config, ProxyError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Apply environment overrides on top of the file config.
///
/// `lookup` is `std::env::var(..).ok()` in production.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.is_empty()) {
        config.anthropic.api_key = Some(key);
    }
    if let Some(host) = lookup(ENV_HOST).filter(|h| !h.is_empty()) {
        config.server.host = host;
    }
    if let Some(port) = lookup(ENV_PORT) {
        match port.parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => eprintln!("Warning: Ignoring invalid {}={}", ENV_PORT, port),
        }
    }
}

pub fn generate_config_sample(path: Option<&Path>) -> Result<(), ProxyError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => get_config_path(),
    };

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        // Create directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| ProxyError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| ProxyError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(ProxyError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
