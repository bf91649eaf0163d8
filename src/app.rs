//! Application context: the locale catalog, router, and document, built
//! explicitly from `Config` at start-up.

use std::path::Path;
use std::sync::Arc;

use acme_core::{
    config::{Config, I18nConfig},
    error::AcmeError,
    traits::Translate,
};
use acme_i18n::{bundled, I18n};
use acme_router::{
    Document, Navigation, RouteDefinition, RouteParams, RouteTable, Router, TitleHook,
    TraceHook, WebHistory,
};

use crate::pages;

/// The output of one visit.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub title: String,
    pub route: String,
    pub path: String,
    pub body: String,
}

pub struct App {
    pub i18n: I18n,
    pub router: Router,
    pub document: Arc<Document>,
}

impl App {
    pub fn new(cfg: &Config) -> Result<Self, AcmeError> {
        let i18n = build_i18n(&cfg.i18n)?;
        let document = Arc::new(Document::new());
        let router = build_router(cfg, document.clone())?;
        Ok(Self {
            i18n,
            router,
            document,
        })
    }

    /// Navigate to `url` and render the page in `locale` (active locale
    /// when `None`).
    pub async fn visit(&self, url: &str, locale: Option<&str>) -> Result<Rendered, AcmeError> {
        let nav = self.router.push(url).await?;
        let tr = match locale {
            Some(code) => self.i18n.scope(code),
            None => self.i18n.translator(),
        };
        Ok(self.render(&nav, &tr))
    }

    fn render(&self, nav: &Navigation, tr: &dyn Translate) -> Rendered {
        let mut nav_links = Vec::new();
        for (name, key) in [("home", "nav.home"), ("about", "nav.about")] {
            if let Ok(href) = self.router.href(name, &RouteParams::new()) {
                nav_links.push(format!("[{}]({href})", tr.t(key)));
            }
        }
        let body = format!(
            "{}\n\n{}\n\n{}",
            nav_links.join(" · "),
            nav.component.render(tr),
            tr.t("footer.rights")
        );
        Rendered {
            title: self.document.title(),
            route: nav.location.name.clone(),
            path: nav.location.full_path.clone(),
            body,
        }
    }
}

/// Build the locale catalog from bundled dictionaries or `locales_dir`.
pub fn build_i18n(cfg: &I18nConfig) -> Result<I18n, AcmeError> {
    let dicts = if cfg.locales_dir.is_empty() {
        bundled::dictionaries()?
    } else {
        bundled::load_dir(Path::new(&cfg.locales_dir))?
    };
    I18n::from_config(cfg, dicts)
}

/// The application's route table.
///
/// | path | name | target | title |
/// |---|---|---|---|
/// | `/home` | home | Home (eager) | Home |
/// | `/about` | about | About (deferred) | About us |
/// | `/` | default | redirect → `/home` | |
/// | `/:pathMatch(.*)*` | not-found | Not found (deferred) | Page not found |
pub fn route_table() -> Result<RouteTable, AcmeError> {
    RouteTable::new(vec![
        RouteDefinition::component("/home", "home", pages::home())?.with_title("Home"),
        RouteDefinition::lazy("/about", "about", pages::about())?.with_title("About us"),
        RouteDefinition::redirect("/", "default", "/home")?,
        RouteDefinition::lazy("/:pathMatch(.*)*", "not-found", pages::not_found())?
            .with_title("Page not found"),
    ])
}

pub fn build_router(cfg: &Config, document: Arc<Document>) -> Result<Router, AcmeError> {
    let history = WebHistory::new(&cfg.router.base_url);
    Ok(Router::new(route_table()?, history)
        .with_hook(Arc::new(TraceHook))
        .with_hook(Arc::new(TitleHook::new(
            cfg.app.name.as_str(),
            cfg.router.title_separator.as_str(),
            document,
        ))))
}
