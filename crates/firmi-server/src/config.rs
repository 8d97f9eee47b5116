//! Server Configuration
//!
//! Read from the environment (a `.env` file is loaded first by `main`).

use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("CHAT_UPSTREAM_URL {0:?} is not an http(s) URL")]
    InvalidUpstream(String),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Built WASM frontend (`STATIC_DIR`)
    pub static_dir: PathBuf,

    /// Chat service that `/api/chat` forwards to (`CHAT_UPSTREAM_URL`)
    pub chat_upstream: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let chat_upstream = get("CHAT_UPSTREAM_URL")
            .map(|url| match reqwest::Url::parse(&url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(url),
                _ => Err(ConfigError::InvalidUpstream(url)),
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()).into(),
            chat_upstream,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.chat_upstream.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("CHAT_UPSTREAM_URL", "https://chat.internal/v1/chat"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.chat_upstream.as_deref(), Some("https://chat.internal/v1/chat"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("CHAT_UPSTREAM_URL", " ")])).unwrap();
        assert!(config.chat_upstream.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("CHAT_UPSTREAM_URL", "ftp://files")])),
            Err(ConfigError::InvalidUpstream(_))
        ));
    }
}
