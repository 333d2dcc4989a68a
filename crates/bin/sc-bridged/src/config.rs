//! Daemon settings: `sc-bridge.toml`, then `SC_BRIDGE_*` environment
//! variables on top.
//!
//! Without a file and without variables the bridge listens on `0.0.0.0:3000`
//! and talks to a local sc-server.

use serde::Deserialize;

use sc_bridge_adapter_sc_ws::ScClientConfig;

const CONFIG_FILE: &str = "sc-bridge.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub sc: ScClientConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Config {
    /// Read [`CONFIG_FILE`] when it exists, apply the process environment and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, and on a zero port or a
    /// non-WebSocket sc url.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// `SC_BRIDGE_BIND` (`host:port`) wins over `SC_BRIDGE_HOST` and
    /// `SC_BRIDGE_PORT`; `RUST_LOG` wins over `SC_BRIDGE_LOG`. Unparsable
    /// ports are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("SC_BRIDGE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("SC_BRIDGE_PORT").and_then(|port| port.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = var("SC_BRIDGE_BIND") {
            if let Some((host, port)) = bind.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(url) = var("SC_BRIDGE_SC_URL") {
            self.sc.url = url;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("SC_BRIDGE_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !(self.sc.url.starts_with("ws://") || self.sc.url.starts_with("wss://")) {
            return Err(ConfigError::Validation(format!(
                "sc url must use ws:// or wss://, got {}",
                self.sc.url
            )));
        }
        Ok(())
    }

    /// `host:port` for the HTTP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sc_bridged=info,sc_bridge=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed sc-bridge.toml")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read sc-bridge.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_env(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).cloned());
        config
    }

    #[test]
    fn should_default_to_port_3000_and_local_sc_server() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.sc.url, "ws://localhost:8090/ws_json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_read_every_section_from_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [sc]
            url = 'ws://kb.local:8090/ws_json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.sc.url, "ws://kb.local:8090/ws_json");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[server]\nport = 8080").unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.sc.url, "ws://localhost:8090/ws_json");
    }

    #[test]
    fn should_fall_back_to_defaults_without_file() {
        let config = Config::from_file("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_override_sc_url_from_env() {
        let config = with_env(&[("SC_BRIDGE_SC_URL", "wss://kb.example.com/ws_json")]);
        assert_eq!(config.sc.url, "wss://kb.example.com/ws_json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = with_env(&[
            ("SC_BRIDGE_HOST", "10.0.0.1"),
            ("SC_BRIDGE_PORT", "4000"),
            ("SC_BRIDGE_BIND", "127.0.0.1:5000"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let config = with_env(&[("SC_BRIDGE_PORT", "http")]);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_prefer_rust_log_over_bridge_log() {
        let config = with_env(&[("SC_BRIDGE_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_non_websocket_url() {
        let mut config = Config::default();
        config.sc.url = "http://localhost:8090/ws_json".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
