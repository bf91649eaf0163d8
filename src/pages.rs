//! Page components: home (eager), about and not found (deferred).

use std::sync::Arc;

use acme_core::{
    error::AcmeError,
    traits::{Component, ComponentLoader, Translate},
};
use async_trait::async_trait;
use tracing::debug;

pub struct HomePage;

impl Component for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn render(&self, tr: &dyn Translate) -> String {
        format!(
            "# {}\n\n{}\n\n[{}]",
            tr.t("home.title"),
            tr.t("home.subtitle"),
            tr.t("home.cta")
        )
    }
}

pub struct AboutPage;

impl Component for AboutPage {
    fn name(&self) -> &str {
        "about"
    }

    fn render(&self, tr: &dyn Translate) -> String {
        format!(
            "# {}\n\n{}\n\n{}",
            tr.t("about.title"),
            tr.t("about.mission"),
            tr.t("about.contact")
        )
    }
}

pub struct NotFoundPage;

impl Component for NotFoundPage {
    fn name(&self) -> &str {
        "not-found"
    }

    fn render(&self, tr: &dyn Translate) -> String {
        format!(
            "# {}\n\n{}\n\n[{}]",
            tr.t("not-found.title"),
            tr.t("not-found.message"),
            tr.t("not-found.back")
        )
    }
}

/// A page built on first visit rather than at start-up.
pub struct DeferredPage {
    name: &'static str,
    build: fn() -> Arc<dyn Component>,
}

impl DeferredPage {
    pub fn new(name: &'static str, build: fn() -> Arc<dyn Component>) -> Arc<Self> {
        Arc::new(Self { name, build })
    }
}

#[async_trait]
impl ComponentLoader for DeferredPage {
    async fn load(&self) -> Result<Arc<dyn Component>, AcmeError> {
        debug!("pages: loading '{}'", self.name);
        tokio::task::yield_now().await;
        Ok((self.build)())
    }
}

pub fn home() -> Arc<dyn Component> {
    Arc::new(HomePage)
}

fn about_page() -> Arc<dyn Component> {
    Arc::new(AboutPage)
}

fn not_found_page() -> Arc<dyn Component> {
    Arc::new(NotFoundPage)
}

pub fn about() -> Arc<DeferredPage> {
    DeferredPage::new("about", about_page)
}

pub fn not_found() -> Arc<DeferredPage> {
    DeferredPage::new("not-found", not_found_page)
}
