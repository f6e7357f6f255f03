use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "userdir.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub introspection: bool,

    #[serde(default = "default_true")]
    pub playground: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            introspection: default_true(),
            playground: default_true(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host:port` to the first address it names. Accepts hostnames
    /// and bare IPv6 literals such as `::`.
    pub async fn socket_addr(&self) -> Result<SocketAddr> {
        let invalid = |reason: String| {
            DirectoryError::Config(format!(
                "invalid listen address {}:{}: {}",
                self.host, self.port, reason
            ))
        };

        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }

    /// URL shown to the operator once the server is listening.
    pub fn display_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "localhost".to_string(),
            other if other.contains(':') => format!("[{}]", other),
            other => other.to_string(),
        };
        format!("http://{}:{}{}", host, self.port, self.path)
    }
}

impl DirectoryConfig {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in the
    /// working directory if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match Self::resolve_path(path) {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = path {
            return Some(p.to_path_buf());
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        fallback.exists().then_some(fallback)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DirectoryConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply command-line (or environment) overrides on top of file settings.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Result<Self> {
        if let Some(h) = host {
            self.server.host = h;
        }
        if let Some(p) = port {
            self.server.port = p;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(DirectoryError::Config(format!(
                "server.path must start with '/': {}",
                self.server.path
            )));
        }
        if self.server.port == 0 {
            return Err(DirectoryError::Config(
                "server.port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
