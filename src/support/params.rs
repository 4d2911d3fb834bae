//! Typed extraction of tool arguments from an MCP request.
//!
//! A JSON `null` argument is treated the same as an absent one; optional
//! extractors only fail when a value is present with the wrong type.

use rmcp::model::CallToolRequestParam;
use serde_json::Value;

use crate::error::{Error, Result};

fn argument<'a>(request: &'a CallToolRequestParam, name: &str) -> Option<&'a Value> {
    request
        .arguments
        .as_ref()
        .and_then(|args| args.get(name))
        .filter(|value| !value.is_null())
}

/// Extract a required string parameter from the request
pub fn extract_required_string<'a>(
    request: &'a CallToolRequestParam,
    param_name: &str,
) -> Result<&'a str> {
    argument(request, param_name)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::InvalidParameter(format!("missing required parameter: {param_name}"))
        })
}

/// Extract a required unsigned integer parameter from the request
pub fn extract_required_u64(request: &CallToolRequestParam, param_name: &str) -> Result<u64> {
    match argument(request, param_name) {
        Some(value) => value.as_u64().ok_or_else(|| {
            Error::InvalidParameter(format!(
                "parameter '{param_name}' must be a non-negative integer"
            ))
        }),
        None => Err(Error::InvalidParameter(format!(
            "missing required parameter: {param_name}"
        ))),
    }
}

/// Extract an optional string parameter from the request
pub fn extract_optional_string(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<Option<String>> {
    match argument(request, param_name) {
        Some(value) => value.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
            Error::InvalidParameter(format!("parameter '{param_name}' must be a string"))
        }),
        None => Ok(None),
    }
}

/// Extract an optional unsigned integer parameter from the request
pub fn extract_optional_u64(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<Option<u64>> {
    match argument(request, param_name) {
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "parameter '{param_name}' must be a non-negative integer"
            ))
        }),
        None => Ok(None),
    }
}

/// Extract an optional boolean parameter from the request
pub fn extract_optional_bool(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<Option<bool>> {
    match argument(request, param_name) {
        Some(value) => value.as_bool().map(Some).ok_or_else(|| {
            Error::InvalidParameter(format!("parameter '{param_name}' must be a boolean"))
        }),
        None => Ok(None),
    }
}

/// Extract an optional string array parameter from the request
pub fn extract_optional_string_array(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<Option<Vec<String>>> {
    match argument(request, param_name) {
        Some(value) => {
            let Some(arr) = value.as_array() else {
                return Err(Error::InvalidParameter(format!(
                    "parameter '{param_name}' must be an array of strings"
                )));
            };

            let mut result = Vec::with_capacity(arr.len());
            for (index, item) in arr.iter().enumerate() {
                if let Some(s) = item.as_str() {
                    result.push(s.to_string());
                } else {
                    return Err(Error::InvalidParameter(format!(
                        "parameter '{param_name}' has a non-string item at index {index}"
                    )));
                }
            }
            Ok(Some(result))
        }
        None => Ok(None),
    }
}
