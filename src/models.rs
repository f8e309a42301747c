use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FORECAST_DAYS, DEFAULT_LOCATION_COUNT};

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Number of days to include (1-16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: i64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetLocationRequest {
    /// City or place name to search for
    pub name: String,
    /// Maximum number of results (1-10)
    #[serde(default = "default_location_count")]
    pub count: i64,
}

fn default_forecast_days() -> i64 {
    DEFAULT_FORECAST_DAYS
}

fn default_location_count() -> i64 {
    DEFAULT_LOCATION_COUNT
}
