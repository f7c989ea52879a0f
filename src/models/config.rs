//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the portal server and its backend gateway.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Cookie signing key; at least 64 bytes.
    pub secret: String,
    /// Base URL of the backend functions origin.
    pub gateway_url: String,
    pub gateway_token: String,
    /// Seed demo records on startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}
