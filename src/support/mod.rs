// Cross-cutting support modules for the MCP server

pub mod params;
pub mod schema;
pub mod serialization;
