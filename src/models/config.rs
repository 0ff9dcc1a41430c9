//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_max_views() -> usize {
    1024
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Base URL of the remote clients API, without the `/clients/` suffix.
    pub api_base_url: String,
    /// Bearer token forwarded to the remote API.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Number of mounted list views kept in memory.
    #[serde(default = "default_max_views")]
    pub max_views: usize,
}
