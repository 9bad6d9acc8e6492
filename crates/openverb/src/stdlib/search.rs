use std::sync::Arc;

use serde_json::Value;

use crate::constants::SEARCH_VERBS;
use crate::dispatch::{sync_handler, VerbHandlersBuilder};
use crate::registries::RouteRegistry;
use crate::types::{SearchResponse, SearchResult};
use crate::verb::VerbResult;

use super::host::{Navigator, SearchHost};
use super::{str_arg, to_json};

const DEFAULT_LIMIT: usize = 10;

/// Route search used when the host has no search of its own.
pub fn default_search(routes: &RouteRegistry, query: &str, limit: Option<usize>) -> SearchResponse {
    let results: Vec<SearchResult> = routes
        .search(query)
        .into_iter()
        .take(limit.unwrap_or(DEFAULT_LIMIT))
        .map(|route| SearchResult {
            id: route.id.clone(),
            title: route.title.clone(),
            snippet: format!("Navigate to {}", route.title),
            url: route.path.clone(),
            kind: "page".to_string(),
        })
        .collect();
    SearchResponse {
        total: results.len(),
        results,
    }
}

pub(super) fn register(
    builder: VerbHandlersBuilder,
    routes: Arc<RouteRegistry>,
    navigator: Arc<dyn Navigator>,
    host: Option<Arc<dyn SearchHost>>,
) -> VerbHandlersBuilder {
    let query_routes = routes.clone();
    builder
        .register(
            SEARCH_VERBS.query,
            sync_handler(move |input| {
                let query = str_arg(&input, "query").unwrap_or_default();
                let scope = str_arg(&input, "scope");
                let limit = input
                    .get("limit")
                    .and_then(Value::as_u64)
                    .map(|limit| limit as usize);
                let response = match &host {
                    Some(host) => host.search(query, scope, limit),
                    None => default_search(&query_routes, query, limit),
                };
                Ok(VerbResult::try_from(to_json(response)?)?)
            }),
        )
        .register(
            SEARCH_VERBS.open_result,
            sync_handler(move |input| {
                let Some(route) = str_arg(&input, "resultId").and_then(|id| routes.find(id)) else {
                    return Ok(VerbResult::new().with("success", false));
                };
                navigator.navigate(&route.path);
                Ok(VerbResult::ok().with("url", route.path.as_str()))
            }),
        )
}
