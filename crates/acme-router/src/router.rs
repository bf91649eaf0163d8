//! The router context: table, lazy component cache, history, and hooks.
//!
//! A navigation moves through two states. While *pending*, the destination
//! is resolved, `before_each` hooks run, and the component is loaded. Once
//! *committed*, history and the current location are updated and
//! `after_each` hooks run. A failed component load aborts the navigation
//! before commit.


use std::sync::Arc;

use acme_core::{error::AcmeError, traits::Component};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::history::{self, WebHistory};
use crate::hooks::{NavigationEvent, NavigationHook};
use crate::lazy::ComponentCache;
use crate::pattern::RouteParams;
use crate::table::{RouteLocation, RouteTable};

/// A committed navigation.
#[derive(Clone)]
pub struct Navigation {
    pub location: RouteLocation,
    pub component: Arc<dyn Component>,
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("location", &self.location)
            .field("component", &self.component.name())
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
enum HistoryMode {
    Push,
    Replace,
    Traverse(isize),
}

struct RouterState {
    history: WebHistory,
    current: Option<RouteLocation>,
}

pub struct Router {
    table: RouteTable,
    cache: ComponentCache,
    base: String,
    hooks: Vec<Arc<dyn NavigationHook>>,
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new(table: RouteTable, history: WebHistory) -> Self {
        let cache = ComponentCache::for_table(&table);
        Self {
            cache,
            base: history.base().to_string(),
            table,
            hooks: Vec::new(),
            state: Mutex::new(RouterState {
                history,
                current: None,
            }),
        }
    }

    /// Register a hook. Hooks run in registration order.
    pub fn with_hook(mut self, hook: Arc<dyn NavigationHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn cache(&self) -> &ComponentCache {
        &self.cache
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The committed location, if any navigation has happened.
    pub async fn current(&self) -> Option<RouteLocation> {
        self.state.lock().await.current.clone()
    }

    /// Resolve a browser URL without navigating.
    pub fn resolve(&self, url: &str) -> Result<RouteLocation, AcmeError> {
        self.table.resolve(&history::strip_base(&self.base, url))
    }

    /// Browser URL of the named route.
    pub fn href(&self, name: &str, params: &RouteParams) -> Result<String, AcmeError> {
        let path = self.path_for(name, params)?;
        Ok(format!("{}{}", self.base, path))
    }

    pub async fn push(&self, url: &str) -> Result<Navigation, AcmeError> {
        let to = self.resolve(url)?;
        self.navigate(to, HistoryMode::Push).await
    }

    pub async fn replace(&self, url: &str) -> Result<Navigation, AcmeError> {
        let to = self.resolve(url)?;
        self.navigate(to, HistoryMode::Replace).await
    }

    /// Navigate to a route by name.
    pub async fn push_named(
        &self,
        name: &str,
        params: &RouteParams,
    ) -> Result<Navigation, AcmeError> {
        let path = self.path_for(name, params)?;
        let to = self.table.resolve(&path)?;
        self.navigate(to, HistoryMode::Push).await
    }

    /// Move one entry back. `None` when there is no earlier entry.
    pub async fn back(&self) -> Result<Option<Navigation>, AcmeError> {
        self.go(-1).await
    }

    /// Move one entry forward. `None` when there is no later entry.
    pub async fn forward(&self) -> Result<Option<Navigation>, AcmeError> {
        self.go(1).await
    }

    async fn go(&self, delta: isize) -> Result<Option<Navigation>, AcmeError> {
        let target = {
            let state = self.state.lock().await;
            state.history.peek(delta).map(str::to_string)
        };
        let Some(target) = target else {
            debug!("router: no history entry at offset {delta}");
            return Ok(None);
        };
        let to = self.table.resolve(&target)?;
        self.navigate(to, HistoryMode::Traverse(delta)).await.map(Some)
    }

    fn path_for(&self, name: &str, params: &RouteParams) -> Result<String, AcmeError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| AcmeError::Route(format!("no route named '{name}'")))?;
        route.path.build(params)
    }

    async fn navigate(
        &self,
        to: RouteLocation,
        mode: HistoryMode,
    ) -> Result<Navigation, AcmeError> {
        let from = self.current().await;
        let event = NavigationEvent {
            to: &to,
            from: from.as_ref(),
        };
        for hook in &self.hooks {
            hook.before_each(&event);
        }

        let route = self.table.by_name(&to.name).ok_or_else(|| {
            AcmeError::Route(format!("resolved unknown route '{}'", to.name))
        })?;
        let component = self.cache.resolve(route).await.inspect_err(|e| {
            warn!("router: navigation to '{}' aborted: {e}", to.full_path)
        })?;

        {
            let mut state = self.state.lock().await;
            match mode {
                HistoryMode::Push => state.history.push(to.full_path.clone()),
                HistoryMode::Replace => state.history.replace(to.full_path.clone()),
                HistoryMode::Traverse(delta) => {
                    if !state.history.go(delta, to.full_path.clone()) {
                        return Err(AcmeError::Route(format!(
                            "history has no entry at offset {delta}"
                        )));
                    }
                }
            }
            state.current = Some(to.clone());
        }

        for hook in &self.hooks {
            hook.after_each(&event);
        }
        debug!("router: committed '{}'", to.full_path);

        Ok(Navigation {
            location: to,
            component,
        })
    }
}
