//! Route registry and route matching.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A page of the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub requires_auth: bool,
}

impl Route {
    /// Case-insensitive substring match against the title or any tag.
    ///
    /// `query` must already be lowercase.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }

    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// Read-only view over a fixed route list.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn all(&self) -> &[Route] {
        &self.routes
    }

    pub fn find(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == id)
    }

    /// Routes whose title or a tag contains `query`, ignoring case, in registry order.
    pub fn search(&self, query: &str) -> Vec<&Route> {
        let query = query.to_lowercase();
        self.routes
            .iter()
            .filter(|route| route.matches_lowercase(&query))
            .collect()
    }
}

/// First route matching `query` by title or tag.
pub fn find_route_by_intent<'a>(routes: &'a [Route], query: &str) -> Option<&'a Route> {
    let query = query.to_lowercase();
    routes.iter().find(|route| route.matches_lowercase(&query))
}

/// Routes allowed for `role`; an unknown role gets none.
pub fn routes_for_role<'a>(
    routes: &'a [Route],
    role: &str,
    role_access: &HashMap<String, Vec<String>>,
) -> Vec<&'a Route> {
    let Some(allowed) = role_access.get(role) else {
        return Vec::new();
    };
    routes
        .iter()
        .filter(|route| allowed.iter().any(|id| *id == route.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route(id: &str, title: &str, tags: &[&str], requires_auth: bool) -> Route {
        Route {
            id: id.to_string(),
            title: title.to_string(),
            path: format!("/{id}"),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            requires_auth,
        }
    }

    fn test_routes() -> Vec<Route> {
        vec![
            route("dashboard", "Dashboard", &["home", "overview"], true),
            route("accounting", "Accounting", &["billing", "invoices", "payments"], true),
            route("help", "Help Center", &["support", "faq"], false),
        ]
    }

    fn role_access() -> HashMap<String, Vec<String>> {
        HashMap::from([
            (
                "admin".to_string(),
                vec!["dashboard".to_string(), "accounting".to_string(), "help".to_string()],
            ),
            ("viewer".to_string(), vec!["dashboard".to_string(), "help".to_string()]),
        ])
    }

    #[test]
    fn registry_all_and_find() {
        let registry = RouteRegistry::new(test_routes());
        assert_eq!(registry.all().len(), 3);
        assert_eq!(registry.find("accounting").expect("route").title, "Accounting");
        assert!(registry.find("nonexistent").is_none());
        assert!(registry.find("Accounting").is_none());
    }

    #[test]
    fn search_by_title_and_tag() {
        let registry = RouteRegistry::new(test_routes());
        let by_title: Vec<&str> = registry.search("accounting").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_title, vec!["accounting"]);
        let by_tag: Vec<&str> = registry.search("billing").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_tag, vec!["accounting"]);
        assert!(registry.search("nonexistent").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let registry = RouteRegistry::new(test_routes());
        assert_eq!(registry.search("ACCOUNTING").len(), 1);
        assert_eq!(registry.search("Invoice").len(), 1);
        assert_eq!(registry.search("center")[0].id, "help");
    }

    #[test]
    fn intent_returns_first_match() {
        let routes = test_routes();
        assert_eq!(find_route_by_intent(&routes, "invoices").expect("route").id, "accounting");
        assert_eq!(find_route_by_intent(&routes, "DASHBOARD").expect("route").id, "dashboard");
        // "o" appears in every route; the first one wins.
        assert_eq!(find_route_by_intent(&routes, "o").expect("route").id, "dashboard");
        assert!(find_route_by_intent(&routes, "nonexistent").is_none());
    }

    #[test]
    fn routes_for_role_filters_by_allow_list() {
        let routes = test_routes();
        let access = role_access();
        assert_eq!(routes_for_role(&routes, "admin", &access).len(), 3);
        let viewer: Vec<&str> = routes_for_role(&routes, "viewer", &access)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(viewer, vec!["dashboard", "help"]);
        assert!(routes_for_role(&routes, "unknown", &access).is_empty());
    }

    #[test]
    fn route_deserializes_camel_case() {
        let route: Route = serde_json::from_value(json!({
            "id": "settings",
            "title": "Settings",
            "path": "/settings",
            "tags": ["preferences"],
            "requiresAuth": true
        }))
        .expect("route");
        assert!(route.requires_auth);
        assert!(route.matches("PREF"));
    }
}
