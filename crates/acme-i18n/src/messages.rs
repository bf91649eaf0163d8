//! Message dictionaries: flattened key → string maps parsed from JSON.

use std::collections::BTreeMap;

use acme_core::error::AcmeError;
use serde_json::Value;

/// Messages for a single locale.
///
/// Nested JSON objects are flattened to dotted keys (`{"nav": {"home": ..}}`
/// becomes `nav.home`); arrays become indexed keys (`steps.0`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDictionary {
    entries: BTreeMap<String, String>,
}

impl MessageDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. The root must be an object.
    pub fn from_json_str(json: &str) -> Result<Self, AcmeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, AcmeError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(AcmeError::Locale(format!(
                    "message dictionary root must be an object, got {}",
                    kind_of(&other)
                )))
            }
        };
        let mut dict = Self::new();
        for (key, child) in map {
            flatten_into(&mut dict.entries, key, child);
        }
        Ok(dict)
    }

    /// Insert a single message, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, format!("{prefix}.{key}"), child);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.into_iter().enumerate() {
                flatten_into(out, format!("{prefix}.{i}"), child);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s);
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
