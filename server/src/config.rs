//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    /// `BIND_ADDR` is set but is not an IP address.
    #[error("invalid BIND_ADDR {value:?}: expected an IPv4 or IPv6 address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory holding the built site (`index.html`, wasm, css, assets).
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_DIR`: default `<crate>/../dist`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORT` or `BIND_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr { value })?,
            None => DEFAULT_BIND_ADDR,
        };
        let site_dir = get("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);

        Ok(Self { bind_addr, port, site_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../dist")
}
