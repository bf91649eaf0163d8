//! Navigation lifecycle hooks.
//!
//! Hooks observe a navigation; they cannot cancel or redirect it.
//! `before_each` runs once the destination is resolved and before its
//! component is loaded; `after_each` runs once the navigation is committed.

use std::sync::Arc;

use tracing::info;

use crate::document::Document;
use crate::table::RouteLocation;

/// A single transition from `from` (absent on the first navigation) to `to`.
#[derive(Debug, Clone, Copy)]
pub struct NavigationEvent<'a> {
    pub to: &'a RouteLocation,
    pub from: Option<&'a RouteLocation>,
}

impl NavigationEvent<'_> {
    /// Name of the origin route, if any.
    pub fn from_name(&self) -> Option<&str> {
        self.from.map(|loc| loc.name.as_str())
    }
}

pub trait NavigationHook: Send + Sync {
    fn before_each(&self, event: &NavigationEvent<'_>);

    fn after_each(&self, _event: &NavigationEvent<'_>) {}
}

/// Sets the document title to `<app name><separator><route title>`.
///
/// A destination without a title gets the bare app name.
pub struct TitleHook {
    app_name: String,
    separator: String,
    document: Arc<Document>,
}

impl TitleHook {
    pub fn new(
        app_name: impl Into<String>,
        separator: impl Into<String>,
        document: Arc<Document>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            separator: separator.into(),
            document,
        }
    }

    pub fn title_for(&self, to: &RouteLocation) -> String {
        match to.title() {
            Some(title) => format!("{}{}{}", self.app_name, self.separator, title),
            None => self.app_name.clone(),
        }
    }
}

impl NavigationHook for TitleHook {
    fn before_each(&self, event: &NavigationEvent<'_>) {
        self.document.set_title(self.title_for(event.to));
    }
}

/// Logs every transition as a structured `tracing` event.
#[derive(Debug, Default)]
pub struct TraceHook;

impl NavigationHook for TraceHook {
    fn before_each(&self, event: &NavigationEvent<'_>) {
        info!(
            from = event.from_name().unwrap_or("none"),
            to = %event.to.name,
            path = %event.to.full_path,
            "navigating"
        );
    }
}
