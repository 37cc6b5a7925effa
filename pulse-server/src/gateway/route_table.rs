//! Static prefix route table for the dispatcher.
//!
//! Each route maps a public `/v1/...` prefix to a backend base URL and
//! the `/api/...` prefix the backend expects. Matching is by path
//! segment: `/v1/posts` and `/v1/posts/123` match the posts route,
//! `/v1/postscript` matches nothing.

use pulse_config::UpstreamConfig;

pub struct Route {
    pub prefix: &'static str,
    pub rewrite: &'static str,
    pub upstream: String,
    pub requires_auth: bool,
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn from_config(upstream: &UpstreamConfig) -> Self {
        Self {
            routes: vec![
                Route {
                    prefix: "/v1/auth",
                    rewrite: "/api/auth",
                    upstream: upstream.identity_url.clone(),
                    requires_auth: false,
                },
                Route {
                    prefix: "/v1/posts",
                    rewrite: "/api/posts",
                    upstream: upstream.post_url.clone(),
                    requires_auth: true,
                },
                Route {
                    prefix: "/v1/media",
                    rewrite: "/api/media",
                    upstream: upstream.media_url.clone(),
                    requires_auth: true,
                },
                Route {
                    prefix: "/v1/search",
                    rewrite: "/api/search",
                    upstream: upstream.search_url.clone(),
                    requires_auth: true,
                },
            ],
        }
    }

    /// Find the route whose prefix owns `path`
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| {
            path.strip_prefix(route.prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    /// Build the backend URL for a matched route: swap the public
    /// prefix for the backend one, keep the remaining path and query.
    pub fn target_url(route: &Route, path: &str, query: Option<&str>) -> String {
        // resolve() guarantees the prefix is present
        let rest = path.strip_prefix(route.prefix).unwrap_or("");

        match query {
            Some(q) => format!("{}{}{}?{}", route.upstream, route.rewrite, rest, q),
            None => format!("{}{}{}", route.upstream, route.rewrite, rest),
        }
    }
}
