//! Tool generation from declarative definitions.
//!
//! Converts each [`SearchToolDef`] into an MCP tool registration and into a
//! request handler. The handler is where the tool boundary lives: every
//! failure (validation, network, HTTP status, decoding) is converted into
//! an error tool result carrying the failure's message, so nothing unwinds
//! past a tool call.

use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};

use crate::search_tools::constants::{
    DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, PARAM_DECORATE, PARAM_FIELDS, PARAM_FILTER,
    PARAM_FROM, PARAM_LIMIT, PARAM_OFFSET, PARAM_QUERY, PARAM_RANGE, PARAM_SORT, PARAM_TO,
};
use crate::search_tools::support::extract::{apply_mode_defaults, extract_search_request};
use crate::search_tools::support::graylog_client::GraylogClient;
use crate::search_tools::support::query::to_query_pairs;
use crate::search_tools::support::response_formatter::{
    SearchResponse, count_summary, format_search_result,
};
use crate::search_tools::tool_definitions::{ResponseMode, SearchToolDef, WindowKind};
use crate::support::schema::SchemaBuilder;
use crate::support::serialization::{error_tool_result, success_tool_result};

/// Generate tool registration from a declarative definition
pub fn generate_tool_registration(def: &SearchToolDef) -> Tool {
    let mut builder = SchemaBuilder::new().add_string_property(
        PARAM_QUERY,
        "Graylog search query, e.g. 'source:web-01 AND level:3'",
        true,
    );

    builder = match def.window {
        WindowKind::Relative => builder.add_integer_property(
            PARAM_RANGE,
            "Relative time range in seconds before now",
            Some(1),
            None,
            true,
        ),
        WindowKind::Absolute => builder
            .add_string_property(
                PARAM_FROM,
                "Start of the absolute window (ISO 8601 timestamp)",
                true,
            )
            .add_string_property(
                PARAM_TO,
                "End of the absolute window (ISO 8601 timestamp)",
                true,
            ),
    };

    let input_schema = builder
        .add_integer_property(
            PARAM_LIMIT,
            &format!("Maximum number of messages to return (default: {DEFAULT_SEARCH_LIMIT})"),
            Some(1),
            Some(MAX_SEARCH_LIMIT),
            false,
        )
        .add_integer_property(PARAM_OFFSET, "Number of messages to skip", Some(0), None, false)
        .add_string_property(PARAM_SORT, "Sort specification, e.g. 'timestamp:desc'", false)
        .add_string_property(PARAM_FILTER, "Additional filter, e.g. 'streams:<stream-id>'", false)
        .add_string_array_property(PARAM_FIELDS, "Message fields to include in the results", false)
        .add_boolean_property(PARAM_DECORATE, "Run backend decorators on matched messages", false)
        .build();

    Tool {
        name:         def.name.into(),
        description:  def.description.into(),
        input_schema,
    }
}

/// Generate a handler invocation for a declarative tool definition
pub async fn generate_tool_handler(
    def: &SearchToolDef,
    client: &GraylogClient,
    request: CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let mut search_request = match extract_search_request(&request, def.window) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(error_tool_result(e.to_string())),
    };
    apply_mode_defaults(&mut search_request, def.mode);

    let pairs = to_query_pairs(&search_request);
    let response: SearchResponse = match client.get(def.endpoint, &pairs).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(tool = def.name, error = %e, "tool call failed");
            return Ok(error_tool_result(e.to_string()));
        }
    };

    let projection = match def.mode {
        ResponseMode::Full => format_search_result(&response),
        ResponseMode::CountOnly => count_summary(&response),
    };
    Ok(success_tool_result(&projection))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::GraylogConfig;
    use crate::search_tools::tool_definitions::get_search_tools;

    fn client_for(server: &MockServer) -> GraylogClient {
        GraylogClient::new(GraylogConfig {
            base_url: format!("{}/", server.uri()),
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
    }

    fn def_named(name: &str) -> SearchToolDef {
        get_search_tools()
            .into_iter()
            .find(|d| d.name == name)
            .expect("tool definition should exist")
    }

    fn call(name: &str, arguments: Value) -> CallToolRequestParam {
        CallToolRequestParam {
            name:      name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        }
    }

    fn content_text(result: &CallToolResult) -> String {
        serde_json::to_value(result)
            .ok()
            .and_then(|v| v["content"][0]["text"].as_str().map(String::from))
            .unwrap_or_default()
    }

    fn backend_body() -> Value {
        json!({
            "query": "message:*",
            "built_query": "{}",
            "took_ms": 12,
            "total_results": 42,
            "messages": [
                {"index": "i1", "message": {"source": "web-01", "level": 3}},
            ],
        })
    }

    #[test]
    fn registration_schema_matches_the_window_kind() {
        let relative = generate_tool_registration(&def_named("search_relative_logs"));
        let required = serde_json::to_value(relative.input_schema.as_ref())
            .unwrap_or_default()["required"]
            .clone();
        assert_eq!(required, json!(["query", "range"]));

        let absolute = generate_tool_registration(&def_named("count_absolute_logs"));
        let required = serde_json::to_value(absolute.input_schema.as_ref())
            .unwrap_or_default()["required"]
            .clone();
        assert_eq!(required, json!(["query", "from", "to"]));
    }

    #[tokio::test]
    async fn relative_search_returns_the_projected_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search/universal/relative"))
            .and(query_param("query", "message:*"))
            .and(query_param("range", "300"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(backend_body()))
            .mount(&server)
            .await;

        let def = def_named("search_relative_logs");
        let request = call(
            "search_relative_logs",
            json!({"query": "message:*", "range": 300, "limit": 1}),
        );
        let result = generate_tool_handler(&def, &client_for(&server), request)
            .await
            .expect("handler should not raise a protocol error");

        assert_eq!(result.is_error, Some(false));
        let text = content_text(&result);
        assert!(text.contains("\"total_results\": 42"));
        let body: Value = serde_json::from_str(&text).expect("result should be JSON");
        let messages = body["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 1);
        assert!(body.get("built_query").is_none());
    }

    #[tokio::test]
    async fn unset_limit_defaults_to_150_for_full_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search/universal/relative"))
            .and(query_param("limit", "150"))
            .respond_with(ResponseTemplate::new(200).set_body_json(backend_body()))
            .expect(1)
            .mount(&server)
            .await;

        let def = def_named("search_relative_logs");
        let request = call("search_relative_logs", json!({"query": "message:*", "range": 60}));
        let result = generate_tool_handler(&def, &client_for(&server), request)
            .await
            .expect("handler should not raise a protocol error");
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn count_absolute_pins_limit_and_offset_and_trims_the_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search/universal/absolute"))
            .and(query_param("from", "2025-01-01T00:00:00Z"))
            .and(query_param("to", "2025-01-01T01:00:00Z"))
            .and(query_param("limit", "0"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(backend_body()))
            .expect(1)
            .mount(&server)
            .await;

        let def = def_named("count_absolute_logs");
        let request = call(
            "count_absolute_logs",
            json!({
                "query": "message:*",
                "from": "2025-01-01T00:00:00Z",
                "to": "2025-01-01T01:00:00Z",
            }),
        );
        let result = generate_tool_handler(&def, &client_for(&server), request)
            .await
            .expect("handler should not raise a protocol error");

        assert_eq!(result.is_error, Some(false));
        let body: Value =
            serde_json::from_str(&content_text(&result)).expect("result should be JSON");
        let object = body.as_object().expect("summary object");
        assert_eq!(object.len(), 3);
        assert_eq!(body["total_results"], 42);
        assert!(body.get("messages").is_none());
    }

    #[tokio::test]
    async fn identical_count_calls_yield_identical_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search/universal/relative"))
            .respond_with(ResponseTemplate::new(200).set_body_json(backend_body()))
            .expect(2)
            .mount(&server)
            .await;

        let def = def_named("count_relative_logs");
        let client = client_for(&server);
        let arguments = json!({"query": "message:*", "range": 300});
        let first = generate_tool_handler(&def, &client, call("count_relative_logs", arguments.clone()))
            .await
            .expect("handler should not raise a protocol error");
        let second = generate_tool_handler(&def, &client, call("count_relative_logs", arguments))
            .await
            .expect("handler should not raise a protocol error");
        assert_eq!(content_text(&first), content_text(&second));
        assert!(content_text(&first).contains("\"total_results\": 42"));
    }

    #[tokio::test]
    async fn backend_errors_become_error_results_with_the_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("index unavailable"))
            .mount(&server)
            .await;

        for name in ["search_relative_logs", "count_relative_logs"] {
            let def = def_named(name);
            let request = call(name, json!({"query": "message:*", "range": 300}));
            let result = generate_tool_handler(&def, &client_for(&server), request)
                .await
                .expect("handler should not raise a protocol error");
            assert_eq!(result.is_error, Some(true));
            assert!(content_text(&result).contains("500"));
        }
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(backend_body()))
            .expect(0)
            .mount(&server)
            .await;

        let cases = [
            ("search_relative_logs", json!({"query": "message:*", "range": 300, "limit": 1001})),
            ("search_relative_logs", json!({"query": "message:*", "range": 0})),
            ("search_relative_logs", json!({"range": 300})),
            ("count_relative_logs", json!({"query": "", "range": 300})),
        ];
        for (name, arguments) in cases {
            let def = def_named(name);
            let result = generate_tool_handler(&def, &client_for(&server), call(name, arguments))
                .await
                .expect("handler should not raise a protocol error");
            assert_eq!(result.is_error, Some(true));
        }
    }
}
