// Support modules shared by the search tool handlers

pub mod extract;
pub mod graylog_client;
pub mod query;
pub mod response_formatter;
