use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Extension dispatch table, in declaration order
    #[serde(default)]
    pub mappings: Vec<MappingEntry>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Lowers the default log filter to debug level
    #[serde(default)]
    pub debug: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// One extension dispatch entry: a lowercase, dot-prefixed extension and the
/// handler identifier that serves it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingEntry {
    pub extension: String,
    pub handler: String,
}
