//! MCP server exposing Graylog's Universal Search API as agent tools.
//!
//! Four tools (relative/absolute search and their count-only variants),
//! each translating a schema-validated tool call into one authenticated GET
//! against a Graylog server and projecting the JSON response back to the
//! caller. Connection parameters come from the environment, are resolved
//! once at startup and injected into the service.

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod search_tools;
pub mod service;
pub mod support;

pub use config::GraylogConfig;
pub use error::{Error, Result};
pub use service::GraylogMcpService;
