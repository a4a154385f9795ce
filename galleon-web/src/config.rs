//! Client tuning knobs, loaded from the embedded static config.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Base URL of the remote session service.
    pub base_url: String,
    /// Synchronization loop period in milliseconds. A tunable, not a
    /// contract; the service tolerates any cadence.
    pub poll_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            poll_ms: 400,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(include_str!("../static/config.json")).unwrap_or_default()
    }
}
