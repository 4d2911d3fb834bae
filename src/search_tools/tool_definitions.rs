//! Declarative definitions of the Graylog search tools.
//!
//! The four tools differ only along two axes: how the time window is
//! expressed (relative seconds vs. absolute timestamps) and how much of the
//! response the caller sees (full messages vs. count only). Instead of
//! four handler modules each tool is described as data. The generator in
//! [`crate::search_tools::tool_generator`] derives both the MCP registration
//! and the request handler from these definitions.

use crate::search_tools::constants::{
    DESC_COUNT_ABSOLUTE, DESC_COUNT_RELATIVE, DESC_SEARCH_ABSOLUTE, DESC_SEARCH_RELATIVE,
    ENDPOINT_ABSOLUTE, ENDPOINT_RELATIVE, TOOL_COUNT_ABSOLUTE, TOOL_COUNT_RELATIVE,
    TOOL_SEARCH_ABSOLUTE, TOOL_SEARCH_RELATIVE,
};

/// How a tool expresses its time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// A window of N seconds before now
    Relative,
    /// A window bounded by explicit from/to timestamps
    Absolute,
}

/// How much of the search response a tool returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// The full projected search response including messages
    Full,
    /// Only query, search duration and total result count
    CountOnly,
}

/// A complete description of one search tool
#[derive(Clone)]
pub struct SearchToolDef {
    /// Tool name as exposed over MCP
    pub name:        &'static str,
    /// Description shown to the caller
    pub description: &'static str,
    /// Universal Search endpoint path the tool queries
    pub endpoint:    &'static str,
    /// Time window flavor
    pub window:      WindowKind,
    /// Response projection flavor
    pub mode:        ResponseMode,
}

/// Get all search tool definitions
pub fn get_search_tools() -> Vec<SearchToolDef> {
    vec![
        SearchToolDef {
            name:        TOOL_SEARCH_RELATIVE,
            description: DESC_SEARCH_RELATIVE,
            endpoint:    ENDPOINT_RELATIVE,
            window:      WindowKind::Relative,
            mode:        ResponseMode::Full,
        },
        SearchToolDef {
            name:        TOOL_COUNT_RELATIVE,
            description: DESC_COUNT_RELATIVE,
            endpoint:    ENDPOINT_RELATIVE,
            window:      WindowKind::Relative,
            mode:        ResponseMode::CountOnly,
        },
        SearchToolDef {
            name:        TOOL_SEARCH_ABSOLUTE,
            description: DESC_SEARCH_ABSOLUTE,
            endpoint:    ENDPOINT_ABSOLUTE,
            window:      WindowKind::Absolute,
            mode:        ResponseMode::Full,
        },
        SearchToolDef {
            name:        TOOL_COUNT_ABSOLUTE,
            description: DESC_COUNT_ABSOLUTE,
            endpoint:    ENDPOINT_ABSOLUTE,
            window:      WindowKind::Absolute,
            mode:        ResponseMode::CountOnly,
        },
    ]
}
