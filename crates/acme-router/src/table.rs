//! Ordered, validated route table.
//!
//! # Invariants
//!
//! 1. Route names are unique.
//! 2. Exactly one catch-all route matches every path (`/` included) and it
//!    is last, so every path resolves to some route.
//! 3. Exactly one route is a redirect (the default route), and its chain
//!    ends at a rendering route within [`MAX_REDIRECTS`] hops.
//!
//! Matching is first-match-wins in table order.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use acme_core::error::AcmeError;
use tracing::debug;

use crate::pattern::RouteParams;
use crate::route::{RouteDefinition, RouteMeta, RouteTarget};

/// Upper bound on redirect hops while resolving a path.
pub const MAX_REDIRECTS: usize = 10;

/// A matched route before redirects are followed.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDefinition,
    pub params: RouteParams,
}

/// A fully resolved destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLocation {
    /// Name of the rendering route.
    pub name: String,
    /// App-relative path without query or hash.
    pub path: String,
    /// Path plus query and hash.
    pub full_path: String,
    pub params: RouteParams,
    pub meta: RouteMeta,
    /// The full path originally requested, when a redirect was followed.
    pub redirected_from: Option<String>,
}

impl RouteLocation {
    pub fn title(&self) -> Option<&str> {
        self.meta.title()
    }
}

#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Validate and freeze `routes`.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, AcmeError> {
        let mut by_name = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            if route.name.trim().is_empty() {
                return Err(AcmeError::Route(format!(
                    "route '{}' has an empty name",
                    route.path
                )));
            }
            if by_name.insert(route.name.clone(), i).is_some() {
                return Err(AcmeError::Route(format!(
                    "duplicate route name '{}'",
                    route.name
                )));
            }
        }

        let catch_alls: Vec<usize> = routes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_catch_all())
            .map(|(i, _)| i)
            .collect();
        match catch_alls.as_slice() {
            [] => {
                return Err(AcmeError::Route(
                    "no catch-all route matching every path; some paths would not resolve"
                        .into(),
                ))
            }
            [i] if *i + 1 == routes.len() => {}
            [i] => {
                return Err(AcmeError::Route(format!(
                    "catch-all route '{}' must be last",
                    routes[*i].name
                )))
            }
            _ => {
                return Err(AcmeError::Route(
                    "more than one catch-all route".into(),
                ))
            }
        }

        let redirects = routes.iter().filter(|r| r.is_redirect()).count();
        if redirects != 1 {
            return Err(AcmeError::Route(format!(
                "expected exactly one default redirect route, found {redirects}"
            )));
        }

        let table = Self { routes, by_name };
        for route in table.routes.iter().filter(|r| r.is_redirect()) {
            table.resolve(route.path.as_str()).map_err(|e| {
                AcmeError::Route(format!("redirect route '{}': {e}", route.name))
            })?;
        }
        debug!("router: {} route(s) registered", table.routes.len());
        Ok(table)
    }

    /// Routes in matching order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// First route whose pattern matches `path`. Redirects are not followed.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .path
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Resolve an app-relative URL, following redirects.
    ///
    /// Query and hash are carried across a redirect unless the target sets
    /// its own.
    pub fn resolve(&self, url: &str) -> Result<RouteLocation, AcmeError> {
        let requested = normalize(url);
        let (mut path, mut suffix) = split_url(&requested);
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let matched = self.match_path(&path).ok_or_else(|| {
                AcmeError::Route(format!("no route matches '{path}'"))
            })?;
            match &matched.route.target {
                RouteTarget::Redirect(to) => {
                    redirected_from.get_or_insert_with(|| requested.clone());
                    let (to_path, to_suffix) = split_url(to);
                    path = to_path;
                    if !to_suffix.is_empty() {
                        suffix = to_suffix;
                    }
                }
                RouteTarget::Component(_) => {
                    return Ok(RouteLocation {
                        name: matched.route.name.clone(),
                        full_path: format!("{path}{suffix}"),
                        path,
                        params: matched.params,
                        meta: matched.route.meta.clone(),
                        redirected_from,
                    });
                }
            }
        }

        Err(AcmeError::Route(format!(
            "too many redirects resolving '{requested}'"
        )))
    }
}

fn normalize(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Split `"/a?x=1#h"` into `("/a", "?x=1#h")`.
pub(crate) fn split_url(url: &str) -> (String, String) {
    match url.find(['?', '#']) {
        Some(i) => (url[..i].to_string(), url[i..].to_string()),
        None => (url.to_string(), String::new()),
    }
}
