use serde::Deserialize;

use crate::constants::{GEOCODING_API_BASE, OPEN_METEO_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Endpoints and transport settings for the Open-Meteo client.
///
/// The server always runs with [`OpenMeteoConfig::default`]; the fields are
/// exposed so a client can be pointed at another host.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenMeteoConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_forecast_base_url() -> String {
    OPEN_METEO_API_BASE.to_string()
}

fn default_geocoding_base_url() -> String {
    GEOCODING_API_BASE.to_string()
}

const fn default_timeout() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
