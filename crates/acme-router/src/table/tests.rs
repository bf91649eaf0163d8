use std::sync::Arc;

use acme_core::traits::{Component, Translate};

use super::*;

struct Page(&'static str);

impl Component for Page {
    fn name(&self) -> &str {
        self.0
    }

    fn render(&self, _tr: &dyn Translate) -> String {
        self.0.to_string()
    }
}

fn page(name: &'static str) -> Arc<dyn Component> {
    Arc::new(Page(name))
}

fn acme_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::component("/home", "home", page("home"))
            .unwrap()
            .with_title("Home"),
        RouteDefinition::component("/about", "about", page("about"))
            .unwrap()
            .with_title("About us"),
        RouteDefinition::redirect("/", "default", "/home").unwrap(),
        RouteDefinition::component("/:pathMatch(.*)*", "not-found", page("not-found"))
            .unwrap()
            .with_title("Page not found"),
    ]
}

#[test]
fn test_defined_paths_resolve_to_their_route() {
    let table = RouteTable::new(acme_routes()).unwrap();
    assert_eq!(table.resolve("/home").unwrap().name, "home");
    assert_eq!(table.resolve("/about").unwrap().name, "about");
    assert_eq!(table.resolve("/About/").unwrap().name, "about");
}

#[test]
fn test_root_redirects_to_home() {
    let table = RouteTable::new(acme_routes()).unwrap();
    let root = table.resolve("/").unwrap();
    let home = table.resolve("/home").unwrap();
    assert_eq!(root.name, home.name);
    assert_eq!(root.path, "/home");
    assert_eq!(root.meta, home.meta);
    assert_eq!(root.redirected_from.as_deref(), Some("/"));
    assert!(home.redirected_from.is_none());
}

#[test]
fn test_unmatched_paths_resolve_to_not_found() {
    let table = RouteTable::new(acme_routes()).unwrap();
    for path in ["/contact", "/home/extra", "/about/us/team", "/homes", "/x?y=1"] {
        let loc = table.resolve(path).unwrap();
        assert_eq!(loc.name, "not-found", "{path}");
        assert_eq!(loc.title(), Some("Page not found"));
    }
    let loc = table.resolve("/a/b").unwrap();
    assert_eq!(loc.params.get("pathMatch"), Some("a/b"));
}

#[test]
fn test_query_and_hash_survive_redirect() {
    let table = RouteTable::new(acme_routes()).unwrap();
    let loc = table.resolve("/?lang=es#top").unwrap();
    assert_eq!(loc.name, "home");
    assert_eq!(loc.path, "/home");
    assert_eq!(loc.full_path, "/home?lang=es#top");
    assert_eq!(loc.redirected_from.as_deref(), Some("/?lang=es#top"));
}

#[test]
fn test_relative_url_is_normalized() {
    let table = RouteTable::new(acme_routes()).unwrap();
    assert_eq!(table.resolve("about").unwrap().name, "about");
}

#[test]
fn test_first_match_wins() {
    let routes = vec![
        RouteDefinition::component("/courses/:id", "course", page("course")).unwrap(),
        RouteDefinition::component("/courses/new", "new-course", page("new")).unwrap(),
        RouteDefinition::redirect("/", "default", "/courses/new").unwrap(),
        RouteDefinition::component("/:all(.*)*", "not-found", page("nf")).unwrap(),
    ];
    let table = RouteTable::new(routes).unwrap();
    assert_eq!(table.match_path("/courses/new").unwrap().route.name, "course");
}

#[test]
fn test_duplicate_names_rejected() {
    let mut routes = acme_routes();
    routes.insert(
        1,
        RouteDefinition::component("/team", "home", page("team")).unwrap(),
    );
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("duplicate route name 'home'"));
}

#[test]
fn test_acme_route_names_are_unique() {
    let table = RouteTable::new(acme_routes()).unwrap();
    let mut names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_catch_all_must_be_last() {
    let mut routes = acme_routes();
    let nf = routes.pop().unwrap();
    routes.insert(0, nf);
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("must be last"));
}

#[test]
fn test_catch_all_required() {
    let mut routes = acme_routes();
    routes.pop();
    assert!(RouteTable::new(routes).is_err());
}

#[test]
fn test_two_catch_alls_rejected() {
    let mut routes = acme_routes();
    routes.push(RouteDefinition::component("/:rest(.*)*", "other", page("other")).unwrap());
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("catch-all"));
}

#[test]
fn test_redirect_loop_rejected() {
    let routes = vec![
        RouteDefinition::redirect("/a", "a", "/a").unwrap(),
        RouteDefinition::component("/:all(.*)*", "not-found", page("nf")).unwrap(),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("too many redirects"));
}

#[test]
fn test_scoped_catch_all_cannot_be_the_fallback() {
    let routes = vec![
        RouteDefinition::component("/home", "home", page("home")).unwrap(),
        RouteDefinition::redirect("/", "default", "/home").unwrap(),
        RouteDefinition::component("/docs/:rest(.*)*", "not-found", page("nf")).unwrap(),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("no catch-all route matching every path"));
}

#[test]
fn test_one_or_more_catch_all_cannot_be_the_fallback() {
    let mut routes = acme_routes();
    routes.pop();
    routes.push(RouteDefinition::component("/:x(.*)+", "not-found", page("nf")).unwrap());
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.to_string().contains("no catch-all route matching every path"));
}

#[test]
fn test_scoped_catch_all_before_fallback_is_allowed() {
    let mut routes = acme_routes();
    routes.insert(
        2,
        RouteDefinition::component("/docs/:rest(.*)*", "docs", page("docs")).unwrap(),
    );
    let table = RouteTable::new(routes).unwrap();
    assert_eq!(table.resolve("/docs/a/b").unwrap().name, "docs");
    assert_eq!(table.resolve("/contact").unwrap().name, "not-found");
}

#[test]
fn test_missing_default_redirect_rejected() {
    let routes: Vec<_> = acme_routes()
        .into_iter()
        .filter(|r| !r.is_redirect())
        .collect();
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err
        .to_string()
        .contains("expected exactly one default redirect route, found 0"));
}

#[test]
fn test_second_redirect_rejected() {
    let mut routes = acme_routes();
    routes.insert(
        2,
        RouteDefinition::redirect("/start", "start", "/home").unwrap(),
    );
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err
        .to_string()
        .contains("expected exactly one default redirect route, found 2"));
}

#[test]
fn test_redirect_target_must_be_absolute() {
    assert!(RouteDefinition::redirect("/", "default", "home").is_err());
}

#[test]
fn test_by_name_lookup() {
    let table = RouteTable::new(acme_routes()).unwrap();
    assert_eq!(table.by_name("about").unwrap().path.as_str(), "/about");
    assert!(table.by_name("missing").is_none());
    assert_eq!(table.len(), 4);
}
