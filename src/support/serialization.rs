//! Shared serialization utilities

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use crate::constants::FALLBACK_JSON;

/// Wrap a projection in a success `CallToolResult`, pretty-printed.
pub fn success_tool_result(data: &Value) -> CallToolResult {
    let text =
        serde_json::to_string_pretty(data).unwrap_or_else(|_| FALLBACK_JSON.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Wrap a failure message in an error `CallToolResult`.
pub fn error_tool_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn content_text(result: &CallToolResult) -> String {
        serde_json::to_value(result)
            .ok()
            .and_then(|v| v["content"][0]["text"].as_str().map(String::from))
            .unwrap_or_default()
    }

    #[test]
    fn success_result_is_pretty_printed_json() {
        let result = success_tool_result(&json!({"total_results": 42}));
        assert_eq!(result.is_error, Some(false));
        let text = content_text(&result);
        assert!(text.contains("\"total_results\": 42"));
    }

    #[test]
    fn error_result_carries_the_message() {
        let result = error_tool_result("Graylog returned HTTP 500 Internal Server Error");
        assert_eq!(result.is_error, Some(true));
        assert!(content_text(&result).contains("HTTP 500"));
    }
}
