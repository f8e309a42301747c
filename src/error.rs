use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Ways a single upstream request can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("response body is empty")]
    EmptyBody,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else if let Some(status) = err.status() {
            FetchError::Status(status)
        } else {
            FetchError::Network(err)
        }
    }
}

/// The three upstream operations, each with its own failure message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CurrentWeather,
    Forecast,
    Location,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::CurrentWeather => "Unable to fetch current weather data for this location.",
            Operation::Forecast => "Unable to fetch forecast data for this location.",
            Operation::Location => "Unable to fetch location data.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Failure returned from a tool operation.
///
/// The `Display` output is the exact message handed back to the caller.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("forecast_days must be between 1 and 16.")]
    ForecastDaysOutOfRange(i64),

    #[error("count must be between 1 and 10.")]
    CountOutOfRange(i64),

    #[error("{operation}")]
    Upstream {
        operation: Operation,
        #[source]
        source: FetchError,
    },
}

impl ToolError {
    pub fn upstream(operation: Operation, source: FetchError) -> Self {
        ToolError::Upstream { operation, source }
    }

    /// Whether the failure was detected before any request was sent
    pub fn is_validation(&self) -> bool {
        match self {
            ToolError::ForecastDaysOutOfRange(_) | ToolError::CountOutOfRange(_) => true,
            ToolError::Upstream { .. } => false,
        }
    }
}
