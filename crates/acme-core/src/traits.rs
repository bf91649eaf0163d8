use std::sync::Arc;

use crate::error::AcmeError;
use async_trait::async_trait;

/// Message lookup seen by the view layer.
///
/// Implemented by the locale catalog; pages receive it at render time so
/// they never reach for a global translator.
pub trait Translate: Send + Sync {
    /// Resolve `key` to a localized string. Missing keys resolve to a
    /// placeholder (the key itself) rather than failing.
    fn t(&self, key: &str) -> String;

    /// Locale code lookups are performed in.
    fn locale(&self) -> &str;
}

/// A renderable page.
///
/// Every page (home, about, not found, ...) implements this trait so the
/// router can hold eager and deferred pages behind one handle.
pub trait Component: Send + Sync {
    /// Human-readable component name.
    fn name(&self) -> &str;

    /// Render the page to text using the given translator.
    fn render(&self, tr: &dyn Translate) -> String;
}

/// Deferred component source.
///
/// The router calls `load` the first time a lazy route is visited and caches
/// the result for the rest of the application's lifetime.
#[async_trait]
pub trait ComponentLoader: Send + Sync {
    /// Fetch or instantiate the component.
    async fn load(&self) -> Result<Arc<dyn Component>, AcmeError>;
}
