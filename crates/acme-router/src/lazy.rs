//! Memoizing resolver for deferred page components.

use std::collections::HashMap;
use std::sync::Arc;

use acme_core::{error::AcmeError, traits::Component};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::route::{ComponentRef, RouteDefinition, RouteTarget};
use crate::table::RouteTable;

/// One cell per lazy route, keyed by route name.
///
/// A loader runs at most once per successful resolution; a failed load
/// leaves the cell empty so the next navigation retries.
pub struct ComponentCache {
    cells: HashMap<String, OnceCell<Arc<dyn Component>>>,
}

impl ComponentCache {
    pub fn for_table(table: &RouteTable) -> Self {
        let cells = table
            .iter()
            .filter(|r| r.is_lazy())
            .map(|r| (r.name.clone(), OnceCell::new()))
            .collect();
        Self { cells }
    }

    /// The component for `route`, loading and caching it on first use.
    pub async fn resolve(
        &self,
        route: &RouteDefinition,
    ) -> Result<Arc<dyn Component>, AcmeError> {
        let component = match &route.target {
            RouteTarget::Redirect(to) => {
                return Err(AcmeError::Component(format!(
                    "route '{}' redirects to '{to}' and has no component",
                    route.name
                )))
            }
            RouteTarget::Component(component) => component,
        };

        let loader = match component {
            ComponentRef::Eager(c) => return Ok(Arc::clone(c)),
            ComponentRef::Lazy(loader) => loader,
        };

        let cell = self.cells.get(&route.name).ok_or_else(|| {
            AcmeError::Component(format!("route '{}' is not in this cache", route.name))
        })?;

        let component = cell
            .get_or_try_init(|| async {
                debug!("router: loading deferred component for '{}'", route.name);
                loader.load().await.inspect_err(|e| {
                    warn!("router: failed to load component for '{}': {e}", route.name)
                })
            })
            .await?;
        Ok(Arc::clone(component))
    }

    /// Whether the lazy route `name` has been resolved.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.cells.get(name).is_some_and(OnceCell::initialized)
    }

    /// Number of lazy routes resolved so far.
    pub fn resolved_count(&self) -> usize {
        self.cells.values().filter(|c| c.initialized()).count()
    }

    /// Number of lazy routes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
