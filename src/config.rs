//! Endpoint configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted endpoint port
pub const MIN_PORT: u16 = 1000;
/// Highest accepted endpoint port
pub const MAX_PORT: u16 = 30000;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Port outside the accepted range
    #[error("Port {0} out of range (1000-30000)")]
    PortOutOfRange(u16),

    /// A required string field was empty
    #[error("Config field '{0}' must not be empty")]
    EmptyField(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Location of a Blazegraph-style SPARQL endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlazegraphConfig {
    /// Host name or address
    pub hostname: String,
    /// HTTP port
    pub port: u16,
    /// Namespace (knowledge base) name
    pub namespace: String,
    /// Servlet context; `blazegraph` in older releases
    pub blazename: String,
}

impl Default for BlazegraphConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 9999,
            namespace: "kb".to_string(),
            blazename: "bigdata".to_string(),
        }
    }
}

impl BlazegraphConfig {
    /// Check the port range and that no string field is empty
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_PORT..=MAX_PORT).contains(&self.port) {
            return Err(ConfigError::PortOutOfRange(self.port));
        }
        for (name, value) in [
            ("hostname", &self.hostname),
            ("namespace", &self.namespace),
            ("blazename", &self.blazename),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// `http://{hostname}:{port}/{blazename}/namespace/{namespace}/sparql`
    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}:{}/{}/namespace/{}/sparql",
            self.hostname, self.port, self.blazename, self.namespace
        )
    }
}
