/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Ceiling for a single upstream request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Instantaneous fields requested by `get_current_weather`
pub const CURRENT_FIELDS: &str = "temperature_2m,is_day,showers,cloud_cover,wind_speed_10m,\
wind_direction_10m,pressure_msl,snowfall,precipitation,relative_humidity_2m,\
apparent_temperature,rain,weather_code,surface_pressure,wind_gusts_10m";

/// Hourly fields requested by `get_forecast`
pub const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m";

pub const FORECAST_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=16;
pub const LOCATION_COUNT_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

pub const DEFAULT_FORECAST_DAYS: i64 = 1;
pub const DEFAULT_LOCATION_COUNT: i64 = 5;

/// Text served by the `resource://about` resource
pub const ABOUT_URI: &str = "resource://about";
pub const ABOUT_TEXT: &str = "Open-Meteo MCP server exposing tools for current weather, \
forecasts, and geocoding-based location lookup.";
