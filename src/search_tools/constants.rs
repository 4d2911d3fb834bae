// This file contains constants specific to the Graylog search tools
// General MCP server constants are in src/constants.rs

// Universal Search endpoints, joined onto the configured base URL
/// Relative-window search endpoint.
pub const ENDPOINT_RELATIVE: &str = "api/search/universal/relative";
/// Absolute-window search endpoint.
pub const ENDPOINT_ABSOLUTE: &str = "api/search/universal/absolute";

// Tool name constants
/// Relative-window full search tool.
pub const TOOL_SEARCH_RELATIVE: &str = "search_relative_logs";
/// Relative-window count tool.
pub const TOOL_COUNT_RELATIVE: &str = "count_relative_logs";
/// Absolute-window full search tool.
pub const TOOL_SEARCH_ABSOLUTE: &str = "search_absolute_logs";
/// Absolute-window count tool.
pub const TOOL_COUNT_ABSOLUTE: &str = "count_absolute_logs";

// Tool descriptions
/// Description for [`TOOL_SEARCH_RELATIVE`].
pub const DESC_SEARCH_RELATIVE: &str = "Search Graylog messages from the last `range` seconds. \
Takes a Graylog query string plus optional limit (default 150, max 1000), offset, sort \
(e.g. 'timestamp:desc'), filter (e.g. 'streams:<id>'), a list of fields to return, and a \
decorate flag. Returns the matching messages together with the backend's total result count.";
/// Description for [`TOOL_COUNT_RELATIVE`].
pub const DESC_COUNT_RELATIVE: &str = "Count Graylog messages matching a query in the last \
`range` seconds. Returns only the query, the backend search time, and the total result count \
without fetching any messages.";
/// Description for [`TOOL_SEARCH_ABSOLUTE`].
pub const DESC_SEARCH_ABSOLUTE: &str = "Search Graylog messages between two explicit `from`/`to` \
timestamps (ISO 8601, e.g. '2025-01-01T00:00:00Z'). Takes a Graylog query string plus optional \
limit (default 150, max 1000), offset, sort, filter, a list of fields to return, and a decorate \
flag. Returns the matching messages together with the backend's total result count.";
/// Description for [`TOOL_COUNT_ABSOLUTE`].
pub const DESC_COUNT_ABSOLUTE: &str = "Count Graylog messages matching a query between two \
explicit `from`/`to` timestamps (ISO 8601). Returns only the query, the backend search time, \
and the total result count without fetching any messages.";

// Parameter name constants
/// Graylog query string parameter.
pub const PARAM_QUERY: &str = "query";
/// Relative window length parameter (seconds before now).
pub const PARAM_RANGE: &str = "range";
/// Absolute window start parameter.
pub const PARAM_FROM: &str = "from";
/// Absolute window end parameter.
pub const PARAM_TO: &str = "to";
/// Maximum number of returned messages.
pub const PARAM_LIMIT: &str = "limit";
/// Number of messages to skip.
pub const PARAM_OFFSET: &str = "offset";
/// Sort specification parameter.
pub const PARAM_SORT: &str = "sort";
/// Additional filter parameter.
pub const PARAM_FILTER: &str = "filter";
/// Field projection parameter.
pub const PARAM_FIELDS: &str = "fields";
/// Decorator toggle parameter.
pub const PARAM_DECORATE: &str = "decorate";

// JSON field name constants (projected responses)
/// Echoed query field.
pub const JSON_FIELD_QUERY: &str = "query";
/// Backend search duration field.
pub const JSON_FIELD_TOOK_MS: &str = "took_ms";
/// Authoritative result count field.
pub const JSON_FIELD_TOTAL_RESULTS: &str = "total_results";

// Defaults and limits
/// Limit applied by the full-search tools when the caller leaves it unset.
pub const DEFAULT_SEARCH_LIMIT: u64 = 150;
/// Limit forced by the count tools so no messages are fetched.
pub const COUNT_LIMIT: u64 = 0;
/// Offset applied by the count tools when the caller leaves it unset.
pub const DEFAULT_COUNT_OFFSET: u64 = 0;
/// Largest limit accepted from a caller.
pub const MAX_SEARCH_LIMIT: u64 = 1000;
