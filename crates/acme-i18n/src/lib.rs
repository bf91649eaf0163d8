//! # acme-i18n
//!
//! Locale message catalogs for the ACME Learning Center. Dictionaries are
//! parsed from JSON, flattened to dotted keys, and resolved through an
//! active locale with a single fallback locale.

pub mod bundled;
pub mod catalog;
pub mod messages;

pub use catalog::{I18n, I18nBuilder, Translator};
pub use messages::MessageDictionary;
