//! MCP server exposing the Open-Meteo weather and geocoding APIs
//!
//! Three tools (`get_current_weather`, `get_forecast`, `get_location`) pass
//! the upstream JSON through unchanged, or answer with a fixed message when
//! the input is out of range or the request fails.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod service;

pub use client::OpenMeteoClient;
pub use config::OpenMeteoConfig;
pub use error::{FetchError, Operation, ToolError};
pub use service::Weather;
