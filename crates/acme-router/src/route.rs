use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use acme_core::{
    error::AcmeError,
    traits::{Component, ComponentLoader},
};
use serde_json::Value;

use crate::pattern::PathPattern;

/// Handle to a page component.
#[derive(Clone)]
pub enum ComponentRef {
    /// Resolved at table construction.
    Eager(Arc<dyn Component>),
    /// Resolved on first navigation, then cached.
    Lazy(Arc<dyn ComponentLoader>),
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager(c) => write!(f, "Eager({})", c.name()),
            Self::Lazy(_) => f.write_str("Lazy"),
        }
    }
}

/// What a route does when matched.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    Component(ComponentRef),
    /// Redirect to another app-relative path.
    Redirect(String),
}

/// Open per-route metadata. `title` feeds the document title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMeta(BTreeMap<String, Value>);

impl RouteMeta {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// The `title` entry, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

/// A single entry in the route table.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub path: PathPattern,
    pub name: String,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteDefinition {
    fn new(path: &str, name: &str, target: RouteTarget) -> Result<Self, AcmeError> {
        Ok(Self {
            path: PathPattern::parse(path)?,
            name: name.to_string(),
            target,
            meta: RouteMeta::default(),
        })
    }

    /// Route rendering an already-resolved component.
    pub fn component(
        path: &str,
        name: &str,
        component: Arc<dyn Component>,
    ) -> Result<Self, AcmeError> {
        Self::new(
            path,
            name,
            RouteTarget::Component(ComponentRef::Eager(component)),
        )
    }

    /// Route whose component is loaded on first visit.
    pub fn lazy(
        path: &str,
        name: &str,
        loader: Arc<dyn ComponentLoader>,
    ) -> Result<Self, AcmeError> {
        Self::new(path, name, RouteTarget::Component(ComponentRef::Lazy(loader)))
    }

    /// Route that redirects to `to`.
    pub fn redirect(path: &str, name: &str, to: &str) -> Result<Self, AcmeError> {
        if !to.starts_with('/') {
            return Err(AcmeError::Route(format!(
                "route '{name}': redirect target '{to}' must start with '/'"
            )));
        }
        Self::new(path, name, RouteTarget::Redirect(to.to_string()))
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        let title: String = title.into();
        self.with_meta("title", title)
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key, value);
        self
    }

    /// Whether this route matches every path (see
    /// [`PathPattern::matches_everything`]).
    pub fn is_catch_all(&self) -> bool {
        self.path.matches_everything()
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.target, RouteTarget::Component(ComponentRef::Lazy(_)))
    }

    /// Short description of the target, for listings.
    pub fn describe_target(&self) -> String {
        match &self.target {
            RouteTarget::Redirect(to) => format!("redirect -> {to}"),
            RouteTarget::Component(ComponentRef::Eager(c)) => format!("{} (eager)", c.name()),
            RouteTarget::Component(ComponentRef::Lazy(_)) => "deferred".to_string(),
        }
    }
}
