//! Query-string serialization of a validated search request.
//!
//! The outgoing payload invariant that no key ever carries an absent value
//! holds by construction: optional members that are `None` simply produce no
//! pair. A `fields` list collapses to a single comma-joined pair; an empty
//! list produces nothing.

use crate::search_tools::constants::{
    PARAM_DECORATE, PARAM_FIELDS, PARAM_FILTER, PARAM_FROM, PARAM_LIMIT, PARAM_OFFSET,
    PARAM_QUERY, PARAM_RANGE, PARAM_SORT, PARAM_TO,
};
use crate::search_tools::support::extract::{SearchRequest, TimeWindow};

/// Serialize a request into query-string pairs for the Universal Search API.
pub fn to_query_pairs(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut pairs = vec![(PARAM_QUERY, request.query.clone())];

    match &request.window {
        TimeWindow::Relative { range } => pairs.push((PARAM_RANGE, range.to_string())),
        TimeWindow::Absolute { from, to } => {
            pairs.push((PARAM_FROM, from.clone()));
            pairs.push((PARAM_TO, to.clone()));
        }
    }

    if let Some(limit) = request.limit {
        pairs.push((PARAM_LIMIT, limit.to_string()));
    }
    if let Some(offset) = request.offset {
        pairs.push((PARAM_OFFSET, offset.to_string()));
    }
    if let Some(sort) = &request.sort {
        pairs.push((PARAM_SORT, sort.clone()));
    }
    if let Some(filter) = &request.filter {
        pairs.push((PARAM_FILTER, filter.clone()));
    }
    if let Some(fields) = request.fields.as_deref().and_then(joined_fields) {
        pairs.push((PARAM_FIELDS, fields));
    }
    if let Some(decorate) = request.decorate {
        pairs.push((PARAM_DECORATE, decorate.to_string()));
    }

    pairs
}

/// Collapse a field-name list into one comma-joined value.
///
/// An empty list yields `None` so the `fields` key is dropped entirely.
pub fn joined_fields(fields: &[String]) -> Option<String> {
    if fields.is_empty() {
        None
    } else {
        Some(fields.join(","))
    }
}
