//! Projection of Universal Search responses.
//!
//! Deserializing into these types *is* the projection: fields the caller is
//! not allowed to see never make it out of serde, and `highlight` only
//! appears on entries where the backend supplied it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::search_tools::constants::{
    JSON_FIELD_QUERY, JSON_FIELD_TOOK_MS, JSON_FIELD_TOTAL_RESULTS,
};

/// The slice of a Universal Search response exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query the backend executed.
    pub query:         String,
    /// Backend-reported search duration in milliseconds.
    pub took_ms:       u64,
    /// Authoritative match count; may exceed `messages.len()` under `limit`.
    pub total_results: u64,
    /// Matched messages, in backend order.
    #[serde(default)]
    pub messages:      Vec<MessageEntry>,
}

/// One matched message, projected to the fields callers may see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEntry {
    /// Name of the index the message lives in.
    pub index:     String,
    /// The message fields themselves.
    pub message:   Map<String, Value>,
    /// Per-field highlight metadata, absent when the backend sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Value>,
}

/// Render the full search projection as a JSON value.
pub fn format_search_result(response: &SearchResponse) -> Value {
    serde_json::to_value(response).unwrap_or(Value::Null)
}

/// Build the three-field projection returned by the count tools.
pub fn count_summary(response: &SearchResponse) -> Value {
    json!({
        JSON_FIELD_QUERY: response.query,
        JSON_FIELD_TOOK_MS: response.took_ms,
        JSON_FIELD_TOTAL_RESULTS: response.total_results,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn backend_response() -> Value {
        json!({
            "query": "message:*",
            "built_query": "{\"from\":0}",
            "used_indices": [{"index_name": "graylog_0"}],
            "took_ms": 12,
            "total_results": 42,
            "from": "2025-01-01T00:00:00.000Z",
            "to": "2025-01-01T01:00:00.000Z",
            "messages": [
                {
                    "index": "graylog_0",
                    "message": {"source": "web-01", "level": 3},
                    "highlight": {"source": [[0, 3]]},
                    "decoration_stats": null,
                },
                {
                    "index": "graylog_1",
                    "message": {"source": "web-02"},
                    "decoration_stats": null,
                },
            ],
        })
    }

    #[test]
    fn deserialization_drops_backend_only_fields() {
        let response: SearchResponse =
            serde_json::from_value(backend_response()).expect("should deserialize");
        let projected = format_search_result(&response);
        assert!(projected.get("built_query").is_none());
        assert!(projected.get("used_indices").is_none());
        assert_eq!(projected["total_results"], 42);
        assert_eq!(projected["took_ms"], 12);
    }

    #[test]
    fn highlight_appears_only_where_the_backend_sent_it() {
        let response: SearchResponse =
            serde_json::from_value(backend_response()).expect("should deserialize");
        let projected = format_search_result(&response);
        let messages = projected["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].get("highlight").is_some());
        assert!(messages[1].get("highlight").is_none());
    }

    #[test]
    fn missing_messages_field_defaults_to_empty() {
        let response: SearchResponse = serde_json::from_value(json!({
            "query": "message:*",
            "took_ms": 3,
            "total_results": 0,
        }))
        .expect("should deserialize");
        assert!(response.messages.is_empty());
    }

    #[test]
    fn count_summary_exposes_exactly_three_fields() {
        let response: SearchResponse =
            serde_json::from_value(backend_response()).expect("should deserialize");
        let summary = count_summary(&response);
        let object = summary.as_object().expect("summary object");
        assert_eq!(object.len(), 3);
        assert_eq!(summary["query"], "message:*");
        assert_eq!(summary["took_ms"], 12);
        assert_eq!(summary["total_results"], 42);
        assert!(summary.get("messages").is_none());
    }
}
