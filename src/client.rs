//! Open-Meteo request adapter
//!
//! Builds query URLs for the forecast and geocoding APIs, issues a single GET
//! per call and hands back the decoded body untouched.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{redirect, Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::OpenMeteoConfig;
use crate::constants::{CURRENT_FIELDS, FORECAST_DAYS_RANGE, HOURLY_FIELDS, LOCATION_COUNT_RANGE};
use crate::error::{FetchError, Operation, ToolError};

/// Stateless client for the Open-Meteo APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Arc<Client>,
    config: Arc<OpenMeteoConfig>,
}

impl OpenMeteoClient {
    /// Creates a client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }

    /// Creates a client against the public Open-Meteo endpoints
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Current conditions at a coordinate
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<Value, ToolError> {
        let url = current_weather_url(&self.config.forecast_base_url, latitude, longitude);
        self.fetch(Operation::CurrentWeather, self.client.get(url)).await
    }

    /// Hourly forecast for `forecast_days` days, which must lie in 1..=16
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, days = %forecast_days))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        forecast_days: i64,
    ) -> Result<Value, ToolError> {
        if !FORECAST_DAYS_RANGE.contains(&forecast_days) {
            return Err(ToolError::ForecastDaysOutOfRange(forecast_days));
        }

        let url = forecast_url(
            &self.config.forecast_base_url,
            latitude,
            longitude,
            forecast_days,
        );
        self.fetch(Operation::Forecast, self.client.get(url)).await
    }

    /// Geocoding lookup by place name, returning at most `count` (1..=10) matches
    #[instrument(skip(self))]
    pub async fn search_location(&self, name: &str, count: i64) -> Result<Value, ToolError> {
        if !LOCATION_COUNT_RANGE.contains(&count) {
            return Err(ToolError::CountOutOfRange(count));
        }

        self.fetch(Operation::Location, self.location_request(name, count))
            .await
    }

    /// Geocoding search request, with every value form-encoded into the query
    fn location_request(&self, name: &str, count: i64) -> RequestBuilder {
        let count = count.to_string();
        self.client
            .get(format!("{}/search", self.config.geocoding_base_url))
            .query(&[
                ("name", name),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
    }

    async fn fetch(&self, operation: Operation, request: RequestBuilder) -> Result<Value, ToolError> {
        self.make_request(request).await.map_err(|e| {
            warn!(error = %e, ?operation, "Open-Meteo request failed");
            ToolError::upstream(operation, e)
        })
    }

    /// Sends a single request and decodes the JSON body as-is
    async fn make_request(&self, request: RequestBuilder) -> Result<Value, FetchError> {
        let request = request.build()?;
        debug!(url = %request.url(), "Requesting Open-Meteo");

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let data = response.json::<Value>().await?;
        if is_empty_body(&data) {
            return Err(FetchError::EmptyBody);
        }

        Ok(data)
    }
}

/// Bodies with no usable content: `null`, `false`, zero, `""`, `[]` and `{}`
fn is_empty_body(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn current_weather_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&current={}",
        base, latitude, longitude, CURRENT_FIELDS
    )
}

fn forecast_url(base: &str, latitude: f64, longitude: f64, forecast_days: i64) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&hourly={}&timezone=auto&forecast_days={}",
        base, latitude, longitude, HOURLY_FIELDS, forecast_days
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OPEN_METEO_API_BASE;
    use serde_json::json;

    #[test]
    fn current_weather_url_requests_instantaneous_fields() {
        let url = current_weather_url(OPEN_METEO_API_BASE, 59.9139, 10.7522);
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=59.9139&longitude=10.7522\
             &current=temperature_2m,is_day,showers,cloud_cover,wind_speed_10m,\
             wind_direction_10m,pressure_msl,snowfall,precipitation,relative_humidity_2m,\
             apparent_temperature,rain,weather_code,surface_pressure,wind_gusts_10m"
        );
    }

    #[test]
    fn forecast_url_carries_days_and_timezone() {
        let url = forecast_url(OPEN_METEO_API_BASE, -33.87, 151.21, 2);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=-33.87&longitude=151.21"));
        assert!(url.contains(
            "&hourly=temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m"
        ));
        assert!(url.ends_with("&timezone=auto&forecast_days=2"));
    }

    #[test]
    fn location_request_percent_encodes_values() {
        let client = OpenMeteoClient::with_defaults().unwrap();
        let request = client.location_request("São Paulo & Co", 3).build().unwrap();
        let url = request.url();

        assert_eq!(url.host_str(), Some("geocoding-api.open-meteo.com"));
        assert_eq!(url.path(), "/v1/search");
        assert_eq!(
            url.query(),
            Some("name=S%C3%A3o+Paulo+%26+Co&count=3&language=en&format=json")
        );

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("name".to_string(), "São Paulo & Co".to_string()));
    }

    #[tokio::test]
    async fn unparseable_base_maps_to_location_message() {
        let client = OpenMeteoClient::new(OpenMeteoConfig {
            geocoding_base_url: "not a url".to_string(),
            ..Default::default()
        })
        .unwrap();

        let err = client.search_location("Oslo", 1).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Unable to fetch location data.");
    }

    #[test]
    fn falsy_bodies_are_failures() {
        for body in [
            Value::Null,
            json!(false),
            json!(0),
            json!(0.0),
            json!(-0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_body(&body), "{body} should count as empty");
        }
    }

    #[test]
    fn content_bearing_bodies_are_data() {
        for body in [
            json!({"results": []}),
            json!([0]),
            json!(true),
            json!(1),
            json!(-0.5),
            json!("0"),
        ] {
            assert!(!is_empty_body(&body), "{body} should count as data");
        }
    }

    #[tokio::test]
    async fn out_of_range_forecast_days_are_rejected() {
        let client = OpenMeteoClient::new(OpenMeteoConfig {
            forecast_base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();

        for days in [0, -1, 17, 100] {
            let err = client.forecast(0.0, 0.0, days).await.unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "forecast_days must be between 1 and 16.");
        }
    }

    #[tokio::test]
    async fn out_of_range_counts_are_rejected() {
        let client = OpenMeteoClient::new(OpenMeteoConfig {
            geocoding_base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();

        for count in [0, -5, 11] {
            let err = client.search_location("Oslo", count).await.unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "count must be between 1 and 10.");
        }
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_operation_message() {
        let client = OpenMeteoClient::new(OpenMeteoConfig {
            forecast_base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();

        let err = client.current_weather(0.0, 0.0).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Unable to fetch current weather data for this location."
        );
    }
}
