//! Application configuration module
//!
//! Provides the server configuration shared by the desktop app and the
//! headless server.
//!
//! Values are resolved in layers, later layers winning:
//!
//! 1. built-in defaults (`0.0.0.0:8000`)
//! 2. optional TOML file at `<config_dir>/localfetch/config.toml`
//! 3. environment variables `LOCALFETCH_HOST`, `LOCALFETCH_PORT`,
//!    `LOCALFETCH_INITIAL_TEXT`

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Listen on all interfaces by default
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_INITIAL_TEXT: &str = "Hello from the LocalFetch server GUI!";

/// Hard cap on the size of the shared text accepted over HTTP (1 MiB)
pub const MAX_TEXT_BYTES: usize = 1024 * 1024;

pub const ENV_HOST: &str = "LOCALFETCH_HOST";
pub const ENV_PORT: &str = "LOCALFETCH_PORT";
pub const ENV_INITIAL_TEXT: &str = "LOCALFETCH_INITIAL_TEXT";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind; `0` picks an ephemeral port
    pub port: u16,
    /// Value of the shared text when the app starts
    pub initial_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            initial_text: DEFAULT_INITIAL_TEXT.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve defaults, the user config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(path) = config_file_path() {
            builder = builder.with_toml_file(&path)?;
        }
        builder.with_env()?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_text.len() > MAX_TEXT_BYTES {
            return Err(ConfigError::InitialTextTooLarge(self.initial_text.len()));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Shape of the optional TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    initial_text: Option<String>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    initial_text: Option<String>,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }

    /// Overlay values from TOML source text
    pub fn with_toml_str(mut self, raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw)?;
        if let Some(host) = file.host {
            self.host = Some(parse_host(&host)?);
        }
        if let Some(port) = file.port {
            self.port = Some(port);
        }
        if let Some(text) = file.initial_text {
            self.initial_text = Some(text);
        }
        Ok(self)
    }

    /// Overlay values from a TOML file. A missing file is not an error.
    pub fn with_toml_file(self, path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                tracing::debug!("Loading config from {}", path.display());
                self.with_toml_str(&raw)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(self),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Overlay values from the process environment
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn with_vars(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = Some(parse_host(&host)?);
        }
        if let Some(port) = lookup(ENV_PORT) {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            self.port = Some(port);
        }
        if let Some(text) = lookup(ENV_INITIAL_TEXT) {
            self.initial_text = Some(text);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            host: self.host.unwrap_or(DEFAULT_HOST),
            port: self.port.unwrap_or(DEFAULT_PORT),
            initial_text: self
                .initial_text
                .unwrap_or_else(|| DEFAULT_INITIAL_TEXT.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidHost(raw.to_string()))
}

/// Per-user directory holding LocalFetch files
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("localfetch"))
}

pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("initial text is {0} bytes, limit is {MAX_TEXT_BYTES}")]
    InitialTextTooLarge(usize),
    #[error("config file error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
