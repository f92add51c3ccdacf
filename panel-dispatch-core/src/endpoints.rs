//! Endpoint resolution
//!
//! Maps symbolic action names to absolute URLs: a configured base URL plus
//! a fixed route table. Pure and synchronous; the base URL is the only
//! configuration the panel takes.

use crate::descriptor::{ActionId, UnknownAction};

/// Resolves action ids to absolute URLs.
///
/// Routes may include link-only entries (pages the panel links to but never
/// dispatches), so the route table is allowed to be a superset of the
/// descriptor table.
#[derive(Clone, Debug)]
pub struct Endpoints {
    base_url: String,
    routes: Vec<(ActionId, &'static str)>,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            routes: Vec::new(),
        }
    }

    /// Register a route for an action id.
    pub fn route(mut self, id: impl Into<ActionId>, path: &'static str) -> Self {
        self.routes.push((id.into(), path));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an id to its absolute URL.
    pub fn resolve(&self, id: ActionId) -> Result<String, UnknownAction> {
        self.routes
            .iter()
            .find(|(route_id, _)| *route_id == id)
            .map(|(_, path)| format!("{}{}", self.base_url, path))
            .ok_or(UnknownAction(id))
    }

    /// All registered routes, resolved, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, String)> + '_ {
        self.routes
            .iter()
            .map(|(id, path)| (*id, format!("{}{}", self.base_url, path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let endpoints = Endpoints::new("http://localhost:8080")
            .route("set", "/api/set")
            .route("loadDb", "/api/load-db");

        assert_eq!(
            endpoints.resolve(ActionId::new("set")).unwrap(),
            "http://localhost:8080/api/set"
        );
        assert_eq!(
            endpoints.resolve(ActionId::new("loadDb")).unwrap(),
            "http://localhost:8080/api/load-db"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = Endpoints::new("http://localhost:8080/").route("set", "/api/set");
        assert_eq!(
            endpoints.resolve(ActionId::new("set")).unwrap(),
            "http://localhost:8080/api/set"
        );
    }

    #[test]
    fn test_unknown_route() {
        let endpoints = Endpoints::new("http://localhost:8080");
        let err = endpoints.resolve(ActionId::new("metrics")).unwrap_err();
        assert_eq!(err, UnknownAction(ActionId::new("metrics")));
    }

    #[test]
    fn test_iter_resolves_in_order() {
        let endpoints = Endpoints::new("http://localhost:8080")
            .route("set", "/api/set")
            .route("metrics", "/metrics");

        let resolved: Vec<_> = endpoints.iter().collect();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].0, ActionId::new("metrics"));
        assert_eq!(resolved[1].1, "http://localhost:8080/metrics");
    }
}
