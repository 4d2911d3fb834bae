// Graylog search tools module

pub mod constants;
pub mod tool_definitions;
pub mod tool_generator;

pub mod support;
