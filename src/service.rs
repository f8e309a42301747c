use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        AnnotateAble, CallToolResult, Content, Implementation, ListResourcesResult,
        PaginatedRequestParam, ProtocolVersion, RawResource, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
    ErrorData as McpError, RoleServer,
};
use serde_json::{json, Value};

use crate::client::OpenMeteoClient;
use crate::config::OpenMeteoConfig;
use crate::constants::{ABOUT_TEXT, ABOUT_URI};
use crate::error::ToolError;
use crate::models::{GetCurrentWeatherRequest, GetForecastRequest, GetLocationRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: OpenMeteoClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service against the public Open-Meteo endpoints
    pub fn new() -> Result<Self> {
        Self::with_config(OpenMeteoConfig::default())
    }

    pub fn with_config(config: OpenMeteoConfig) -> Result<Self> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    fn about_resource() -> Resource {
        let mut resource = RawResource::new(ABOUT_URI, "about");
        resource.description = Some("Describe this MCP server and its capabilities.".to_string());
        resource.mime_type = Some("text/plain".to_string());
        resource.no_annotation()
    }

    fn read_about(uri: &str) -> Result<ReadResourceResult, McpError> {
        match uri {
            ABOUT_URI => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(ABOUT_TEXT, uri)],
            }),
            _ => Err(McpError::resource_not_found(
                "resource_not_found",
                Some(json!({ "uri": uri })),
            )),
        }
    }
}

/// Turns an operation outcome into tool content.
///
/// Failures are reported as plain text, never as an MCP error.
fn into_tool_result(outcome: Result<Value, ToolError>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(data) => Ok(CallToolResult::success(vec![Content::json(data)?])),
        Err(err) => Ok(CallToolResult::success(vec![Content::text(err.to_string())])),
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the Open-Meteo API. \
                Provides current weather, hourly forecasts and place name lookup for any location worldwide."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![Self::about_resource()]))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::info!("Reading resource: {}", uri);
        Self::read_about(&uri)
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather conditions for a coordinate
    #[tool(description = "Get current weather for a location. Provide latitude and longitude (e.g., latitude: 59.9139, longitude: 10.7522 for Oslo).")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting current weather for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        into_tool_result(
            self.client
                .current_weather(request.latitude, request.longitude)
                .await,
        )
    }

    /// Gets an hourly forecast for a coordinate
    #[tool(description = "Get an hourly forecast for a location. Provide latitude, longitude and optionally forecast_days (1-16, default 1).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting {}-day forecast for coordinates: {}, {}",
            request.forecast_days,
            request.latitude,
            request.longitude
        );

        into_tool_result(
            self.client
                .forecast(request.latitude, request.longitude, request.forecast_days)
                .await,
        )
    }

    /// Looks up locations by name via the geocoding API
    #[tool(description = "Find a location using the Open-Meteo Geocoding API. Provide a city or place name and optionally count (1-10, default 5) for the maximum number of results.")]
    async fn get_location(
        &self,
        Parameters(request): Parameters<GetLocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Searching location: {} (count {})", request.name, request.count);

        into_tool_result(
            self.client
                .search_location(&request.name, request.count)
                .await,
        )
    }
}
