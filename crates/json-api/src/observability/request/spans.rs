//! HTTP route label helpers.

/// Label for requests that match no known route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the route template it targets.
///
/// Id positions collapse to `{id}` whatever they hold, and unknown paths share
/// one label, so the label set is fixed by the router.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => "/",
        ["tasks"] => "/tasks",
        ["tasks", _] => "/tasks/{id}",
        ["products"] => "/products",
        ["products", "search"] => "/products/search",
        ["products", "search", _] => "/products/search/{id}",
        ["products", _] => "/products/{id}",
        ["healthcheck"] => "/healthcheck",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["api-docs", ..] => "/api-docs",
        _ => UNMATCHED_ROUTE,
    }
}
