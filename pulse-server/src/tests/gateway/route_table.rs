use crate::RouteTable;

use pulse_config::UpstreamConfig;

fn table() -> RouteTable {
    RouteTable::from_config(&UpstreamConfig::default())
}

#[test]
fn test_resolve_exact_prefix() {
    let table = table();

    let route = table.resolve("/v1/posts").unwrap();
    assert_eq!(route.prefix, "/v1/posts");
    assert!(route.requires_auth);
}

#[test]
fn test_resolve_nested_path() {
    let table = table();

    let route = table.resolve("/v1/posts/123/comments").unwrap();
    assert_eq!(route.rewrite, "/api/posts");
}

#[test]
fn test_resolve_rejects_partial_segment() {
    let table = table();

    // "/v1/postscript" shares bytes with "/v1/posts" but is a
    // different segment
    assert!(table.resolve("/v1/postscript").is_none());
}

#[test]
fn test_resolve_unknown_prefix() {
    let table = table();

    assert!(table.resolve("/v2/posts").is_none());
    assert!(table.resolve("/api/posts").is_none());
}

#[test]
fn test_auth_route_is_public() {
    let table = table();

    let route = table.resolve("/v1/auth/login").unwrap();
    assert!(!route.requires_auth);
}

#[test]
fn test_target_url_rewrites_prefix_and_keeps_query() {
    let table = table();
    let route = table.resolve("/v1/posts/123").unwrap();

    let url = RouteTable::target_url(route, "/v1/posts/123", Some("page=2&sort=desc"));

    assert_eq!(url, "http://127.0.0.1:4002/api/posts/123?page=2&sort=desc");
}

#[test]
fn test_target_url_without_query() {
    let table = table();
    let route = table.resolve("/v1/search").unwrap();

    let url = RouteTable::target_url(route, "/v1/search", None);

    assert_eq!(url, "http://127.0.0.1:4004/api/search");
}
