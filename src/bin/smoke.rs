//! Runs the three operations against the live Open-Meteo API and prints the
//! results: look up Oslo, then fetch current weather and a two-day forecast
//! for the first match.

use anyhow::Result;
use open_meteo_mcp::{OpenMeteoClient, ToolError};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_COORDINATES: (f64, f64) = (59.9139, 10.7522);

fn print_result(label: &str, result: &Result<Value, ToolError>) {
    println!("\n=== {} ===", label);
    match result {
        Ok(data) => println!("{}", data),
        Err(err) => println!("{}", err),
    }
}

fn first_match(location: &Value) -> Option<(f64, f64)> {
    let first = location.get("results")?.get(0)?;
    Some((first.get("latitude")?.as_f64()?, first.get("longitude")?.as_f64()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "open_meteo_mcp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = OpenMeteoClient::with_defaults()?;

    let location = client.search_location("Oslo", 3).await;
    print_result("get_location", &location);

    let (latitude, longitude) = location
        .as_ref()
        .ok()
        .and_then(first_match)
        .unwrap_or(FALLBACK_COORDINATES);

    let current = client.current_weather(latitude, longitude).await;
    print_result("get_current_weather", &current);

    let forecast = client.forecast(latitude, longitude, 2).await;
    print_result("get_forecast", &forecast);

    Ok(())
}
