//! The MCP service wiring.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use crate::config::GraylogConfig;
use crate::constants::SERVER_INSTRUCTIONS;
use crate::registry;
use crate::search_tools::support::graylog_client::GraylogClient;

/// MCP server handler for the Graylog search tools.
///
/// Holds the one client built from the startup configuration; tool
/// invocations share it and own no other state, so concurrent dispatch by
/// the transport is safe by construction.
#[derive(Clone)]
pub struct GraylogMcpService {
    client: Arc<GraylogClient>,
}

impl GraylogMcpService {
    /// Build the service around a resolved configuration.
    pub fn new(config: GraylogConfig) -> Self {
        Self {
            client: Arc::new(GraylogClient::new(config)),
        }
    }

    /// The shared Graylog client.
    pub fn client(&self) -> &GraylogClient {
        &self.client
    }
}

impl ServerHandler for GraylogMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(registry::register_tools())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        registry::handle_tool_call(&self.client, request).await
    }
}
