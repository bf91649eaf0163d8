//! # acme-router
//!
//! Client-side routing for the ACME Learning Center: an ordered route table
//! with first-match-wins lookup and a catch-all fallback, redirects, a
//! memoizing resolver for deferred page components, path-based history
//! under a base URL, and before/after navigation hooks.

pub mod document;
pub mod history;
pub mod hooks;
pub mod lazy;
pub mod pattern;
pub mod route;
pub mod router;
pub mod table;

pub use document::Document;
pub use history::WebHistory;
pub use hooks::{NavigationEvent, NavigationHook, TitleHook, TraceHook};
pub use lazy::ComponentCache;
pub use pattern::{PathPattern, RouteParams};
pub use route::{ComponentRef, RouteDefinition, RouteMeta, RouteTarget};
pub use router::{Navigation, Router};
pub use table::{RouteLocation, RouteMatch, RouteTable};
