//! Locale catalog: the i18n context handed to the view layer.
//!
//! Lookup order is the requested locale, then the fallback locale, then the
//! key itself. Lookups never fail.


use std::collections::{BTreeMap, HashMap};

use acme_core::{config::I18nConfig, error::AcmeError, traits::Translate};
use tracing::{debug, warn};

use crate::messages::MessageDictionary;

/// Immutable i18n context built once at start-up.
#[derive(Debug, Clone)]
pub struct I18n {
    locale: String,
    fallback_locale: String,
    global_injection: bool,
    messages: HashMap<String, MessageDictionary>,
}

/// Builder for [`I18n`].
#[derive(Debug, Default)]
pub struct I18nBuilder {
    locale: Option<String>,
    fallback_locale: Option<String>,
    global_injection: bool,
    messages: HashMap<String, MessageDictionary>,
}

impl I18nBuilder {
    /// Active locale. Defaults to the fallback locale when unset.
    pub fn locale(mut self, code: impl Into<String>) -> Self {
        self.locale = Some(code.into());
        self
    }

    pub fn fallback_locale(mut self, code: impl Into<String>) -> Self {
        self.fallback_locale = Some(code.into());
        self
    }

    /// Expose resolved strings as template bindings (see [`I18n::bindings`]).
    pub fn global_injection(mut self, enabled: bool) -> Self {
        self.global_injection = enabled;
        self
    }

    /// Register the dictionary for one locale, replacing any earlier one.
    pub fn messages(mut self, code: impl Into<String>, dict: MessageDictionary) -> Self {
        self.messages.insert(code.into(), dict);
        self
    }

    /// Register several dictionaries at once.
    pub fn all_messages(
        mut self,
        dicts: impl IntoIterator<Item = (String, MessageDictionary)>,
    ) -> Self {
        self.messages.extend(dicts);
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// The fallback locale must have a dictionary. An active locale without
    /// one is allowed; every lookup then resolves through the fallback.
    pub fn build(self) -> Result<I18n, AcmeError> {
        let fallback_locale = self
            .fallback_locale
            .ok_or_else(|| AcmeError::Locale("fallback locale not set".into()))?;
        if !self.messages.contains_key(&fallback_locale) {
            return Err(AcmeError::Locale(format!(
                "fallback locale '{fallback_locale}' has no message dictionary"
            )));
        }
        let locale = self.locale.unwrap_or_else(|| fallback_locale.clone());
        if !self.messages.contains_key(&locale) {
            warn!("i18n: active locale '{locale}' has no dictionary, using '{fallback_locale}'");
        }
        debug!(
            "i18n: {} locale(s), active={locale}, fallback={fallback_locale}",
            self.messages.len()
        );
        Ok(I18n {
            locale,
            fallback_locale,
            global_injection: self.global_injection,
            messages: self.messages,
        })
    }
}

impl I18n {
    pub fn builder() -> I18nBuilder {
        I18nBuilder::default()
    }

    /// Build from the `[i18n]` config section and a set of dictionaries.
    pub fn from_config(
        cfg: &I18nConfig,
        dicts: impl IntoIterator<Item = (String, MessageDictionary)>,
    ) -> Result<Self, AcmeError> {
        Self::builder()
            .locale(&cfg.locale)
            .fallback_locale(&cfg.fallback_locale)
            .global_injection(cfg.global_injection)
            .all_messages(dicts)
            .build()
    }

    /// Active locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn global_injection(&self) -> bool {
        self.global_injection
    }

    /// Locale codes with a dictionary, sorted.
    pub fn available_locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn dictionary(&self, locale: &str) -> Option<&MessageDictionary> {
        self.messages.get(locale)
    }

    /// Look up `key` in the active locale.
    pub fn t(&self, key: &str) -> String {
        self.t_in(key, &self.locale)
    }

    /// Look up `key` in `locale`, then the fallback locale, then return the
    /// key itself.
    pub fn t_in(&self, key: &str, locale: &str) -> String {
        self.lookup(key, locale).unwrap_or(key).to_string()
    }

    /// Whether `key` exists in exactly `locale` (no fallback).
    pub fn te(&self, key: &str, locale: &str) -> bool {
        self.messages
            .get(locale)
            .is_some_and(|dict| dict.contains(key))
    }

    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        if let Some(v) = self.messages.get(locale).and_then(|d| d.get(key)) {
            return Some(v);
        }
        let v = self
            .messages
            .get(&self.fallback_locale)
            .and_then(|d| d.get(key));
        if v.is_none() {
            debug!("i18n: missing key '{key}' for locale '{locale}'");
        }
        v
    }

    /// A view of this catalog with a different active locale.
    pub fn scope<'a>(&'a self, locale: &'a str) -> Translator<'a> {
        Translator {
            catalog: self,
            locale,
        }
    }

    /// Translator bound to the active locale.
    pub fn translator(&self) -> Translator<'_> {
        self.scope(&self.locale)
    }

    /// Template bindings for the active locale, fallback-merged.
    ///
    /// `None` unless global injection is enabled.
    pub fn bindings(&self) -> Option<BTreeMap<String, String>> {
        if !self.global_injection {
            return None;
        }
        let mut out = BTreeMap::new();
        for code in [&self.fallback_locale, &self.locale] {
            if let Some(dict) = self.messages.get(code) {
                out.extend(dict.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            }
        }
        Some(out)
    }

    /// Keys the fallback locale defines that `locale` lacks, sorted.
    pub fn missing_keys(&self, locale: &str) -> Vec<&str> {
        let Some(fallback) = self.messages.get(&self.fallback_locale) else {
            return Vec::new();
        };
        let target = self.messages.get(locale);
        fallback
            .keys()
            .filter(|k| !target.is_some_and(|d| d.contains(k)))
            .collect()
    }
}

/// Borrowed lookup view bound to one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a I18n,
    locale: &'a str,
}

impl Translate for Translator<'_> {
    fn t(&self, key: &str) -> String {
        self.catalog.t_in(key, self.locale)
    }

    fn locale(&self) -> &str {
        self.locale
    }
}
