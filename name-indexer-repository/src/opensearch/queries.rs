//! OpenSearch query builders.
//!
//! This module provides functions to build the rescored name-search body.
//! The initial `match` phase keeps recall wide; a `rescore` block then
//! re-ranks the window with the plugin's `name_score` function, which is only
//! expressible as a raw `function_score` query.

use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::types::NameSearchRequest;

/// Build the full search body for a rescored name search.
pub fn build_name_search(request: &NameSearchRequest, config: &SearchConfig) -> Value {
    json!({
        "from": 0,
        "size": config.max_results,
        "query": build_match_query(&request.field, &request.query),
        "rescore": build_rescore(request, config)
    })
}

/// Build the initial match query on the requested field.
fn build_match_query(field: &str, query: &str) -> Value {
    json!({
        "match": {
            field: {
                "query": query
            }
        }
    })
}

/// Build the rescore block.
///
/// With the default weights the match score contributes nothing and the final
/// ranking comes entirely from the name-scoring function.
fn build_rescore(request: &NameSearchRequest, config: &SearchConfig) -> Value {
    json!({
        "window_size": config.rescore_window,
        "query": {
            "query_weight": config.query_weight,
            "rescore_query_weight": config.rescore_query_weight,
            "rescore_query": build_name_score(&request.field, request.rescore_name())
        }
    })
}

/// Build the plugin's `name_score` function-score query.
fn build_name_score(field: &str, query_name: &str) -> Value {
    json!({
        "function_score": {
            "name_score": {
                "field": field,
                "query_name": query_name
            }
        }
    })
}
