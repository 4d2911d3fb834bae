//! Extraction and validation of search tool arguments.

use rmcp::model::CallToolRequestParam;

use crate::error::{Error, Result};
use crate::search_tools::constants::{
    COUNT_LIMIT, DEFAULT_COUNT_OFFSET, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, PARAM_DECORATE,
    PARAM_FIELDS, PARAM_FILTER, PARAM_FROM, PARAM_LIMIT, PARAM_OFFSET, PARAM_QUERY, PARAM_RANGE,
    PARAM_SORT, PARAM_TO,
};
use crate::search_tools::tool_definitions::{ResponseMode, WindowKind};
use crate::support::params::{
    extract_optional_bool, extract_optional_string, extract_optional_string_array,
    extract_optional_u64, extract_required_string, extract_required_u64,
};

/// The time window of one search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeWindow {
    /// The last `range` seconds
    Relative {
        /// Window length in seconds, always positive
        range: u64,
    },
    /// An explicit timestamp interval
    Absolute {
        /// Window start timestamp
        from: String,
        /// Window end timestamp
        to:   String,
    },
}

/// A validated search request, ready for query-string serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Graylog query string, never empty
    pub query:    String,
    /// Time window of the search
    pub window:   TimeWindow,
    /// Maximum number of messages to return
    pub limit:    Option<u64>,
    /// Number of messages to skip
    pub offset:   Option<u64>,
    /// Sort specification, passed through verbatim
    pub sort:     Option<String>,
    /// Additional filter, passed through verbatim
    pub filter:   Option<String>,
    /// Message fields to return
    pub fields:   Option<Vec<String>>,
    /// Whether the backend should run decorators
    pub decorate: Option<bool>,
}

/// Extract and validate a search request from the raw tool call.
///
/// Every rule here runs before any network traffic: empty queries, a zero
/// `range`, empty `from`/`to` timestamps, a `limit` outside 1..=1000 and
/// empty field names are all rejected with a message naming the parameter.
pub fn extract_search_request(
    request: &CallToolRequestParam,
    window: WindowKind,
) -> Result<SearchRequest> {
    let query = extract_required_string(request, PARAM_QUERY)?;
    if query.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "parameter '{PARAM_QUERY}' must not be empty"
        )));
    }

    let window = match window {
        WindowKind::Relative => {
            let range = extract_required_u64(request, PARAM_RANGE)?;
            if range == 0 {
                return Err(Error::InvalidParameter(format!(
                    "parameter '{PARAM_RANGE}' must be a positive number of seconds"
                )));
            }
            TimeWindow::Relative { range }
        }
        WindowKind::Absolute => {
            let from = extract_required_string(request, PARAM_FROM)?;
            let to = extract_required_string(request, PARAM_TO)?;
            if from.is_empty() || to.is_empty() {
                return Err(Error::InvalidParameter(format!(
                    "parameters '{PARAM_FROM}' and '{PARAM_TO}' must not be empty"
                )));
            }
            TimeWindow::Absolute {
                from: from.to_string(),
                to:   to.to_string(),
            }
        }
    };

    let limit = extract_optional_u64(request, PARAM_LIMIT)?;
    if let Some(limit) = limit {
        if limit == 0 || limit > MAX_SEARCH_LIMIT {
            return Err(Error::InvalidParameter(format!(
                "parameter '{PARAM_LIMIT}' must be between 1 and {MAX_SEARCH_LIMIT}"
            )));
        }
    }

    let fields = extract_optional_string_array(request, PARAM_FIELDS)?;
    if let Some(fields) = &fields {
        if fields.iter().any(String::is_empty) {
            return Err(Error::InvalidParameter(format!(
                "parameter '{PARAM_FIELDS}' must not contain empty field names"
            )));
        }
    }

    Ok(SearchRequest {
        query: query.to_string(),
        window,
        limit,
        offset: extract_optional_u64(request, PARAM_OFFSET)?,
        sort: extract_optional_string(request, PARAM_SORT)?,
        filter: extract_optional_string(request, PARAM_FILTER)?,
        fields,
        decorate: extract_optional_bool(request, PARAM_DECORATE)?,
    })
}

/// Apply the per-mode defaults from the tool table.
///
/// Full searches default `limit` to 150; count tools force `limit` to 0 so
/// no messages are fetched and pin `offset` to 0 when unset.
pub fn apply_mode_defaults(request: &mut SearchRequest, mode: ResponseMode) {
    match mode {
        ResponseMode::Full => {
            request.limit = request.limit.or(Some(DEFAULT_SEARCH_LIMIT));
        }
        ResponseMode::CountOnly => {
            request.limit = Some(COUNT_LIMIT);
            request.offset = Some(request.offset.unwrap_or(DEFAULT_COUNT_OFFSET));
        }
    }
}
