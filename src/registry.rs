//! Tool registration and dispatch.

use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, ListToolsResult};

use crate::search_tools::support::graylog_client::GraylogClient;
use crate::search_tools::tool_definitions::get_search_tools;
use crate::search_tools::tool_generator::{generate_tool_handler, generate_tool_registration};

/// Build the tool list advertised to MCP clients.
pub fn register_tools() -> ListToolsResult {
    let tools = get_search_tools()
        .iter()
        .map(generate_tool_registration)
        .collect();

    ListToolsResult {
        next_cursor: None,
        tools,
    }
}

/// Dispatch one tool call to the matching definition.
pub async fn handle_tool_call(
    client: &GraylogClient,
    request: CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let defs = get_search_tools();
    let Some(def) = defs.iter().find(|def| def.name == request.name.as_ref()) else {
        return Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        ));
    };

    generate_tool_handler(def, client, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraylogConfig;

    #[test]
    fn all_four_tools_are_registered() {
        let result = register_tools();
        let names: Vec<&str> = result.tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(
            names,
            [
                "search_relative_logs",
                "count_relative_logs",
                "search_absolute_logs",
                "count_absolute_logs",
            ]
        );
    }

    #[tokio::test]
    async fn unknown_tools_are_rejected_at_the_protocol_level() {
        let client = GraylogClient::new(
            GraylogConfig::from_values(
                Some("http://127.0.0.1:9/".to_string()),
                Some("admin".to_string()),
                Some("secret".to_string()),
            )
            .expect("config should resolve"),
        );
        let request = CallToolRequestParam {
            name:      "drop_all_logs".into(),
            arguments: None,
        };
        let err = handle_tool_call(&client, request)
            .await
            .expect_err("unknown tool should fail");
        assert!(err.to_string().contains("drop_all_logs"));
    }
}
