// This file contains constants for the main MCP server and cross-cutting concerns
// Search-tool constants are in src/search_tools/constants.rs

/// Environment variable holding the Graylog base URL.
pub const ENV_BASE_URL: &str = "GRAYLOG_BASE_URL";
/// Environment variable holding the Graylog username.
pub const ENV_USERNAME: &str = "GRAYLOG_USERNAME";
/// Environment variable holding the Graylog password.
pub const ENV_PASSWORD: &str = "GRAYLOG_PASSWORD";

/// Instructions surfaced to MCP clients during the handshake.
pub const SERVER_INSTRUCTIONS: &str = "Search Graylog logs through the Universal Search API. \
Use search_relative_logs/count_relative_logs for 'last N seconds' windows and \
search_absolute_logs/count_absolute_logs for explicit from/to timestamps. Queries use \
Graylog's search query language (e.g. 'source:web-01 AND level:3').";

// Error Handling Constants
/// Serialized fallback used when a response cannot be rendered as JSON.
pub const FALLBACK_JSON: &str = "{}";
