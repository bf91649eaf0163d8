//! Dictionaries shipped with the binary and loading from a locales directory.

use std::path::Path;

use acme_core::error::AcmeError;
use tracing::{info, warn};

use crate::messages::MessageDictionary;

const EN: &str = include_str!("../locales/en.json");
const ES: &str = include_str!("../locales/es.json");

/// Locale codes with a bundled dictionary.
pub const BUNDLED_LOCALES: &[&str] = &["en", "es"];

/// Parse the bundled `en` and `es` dictionaries.
pub fn dictionaries() -> Result<Vec<(String, MessageDictionary)>, AcmeError> {
    [("en", EN), ("es", ES)]
        .into_iter()
        .map(|(code, json)| {
            MessageDictionary::from_json_str(json)
                .map(|dict| (code.to_string(), dict))
                .map_err(|e| AcmeError::Locale(format!("bundled locale '{code}': {e}")))
        })
        .collect()
}

/// Load every `<code>.json` file in `dir`.
///
/// Files with other extensions are skipped. A malformed dictionary is an
/// error; an empty directory yields an empty list.
pub fn load_dir(dir: &Path) -> Result<Vec<(String, MessageDictionary)>, AcmeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        AcmeError::Locale(format!("failed to read locales dir {}: {e}", dir.display()))
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!("i18n: skipping non-UTF-8 locale file {}", path.display());
            continue;
        };
        let content = std::fs::read_to_string(&path)?;
        let dict = MessageDictionary::from_json_str(&content)
            .map_err(|e| AcmeError::Locale(format!("{}: {e}", path.display())))?;
        info!("i18n: loaded {} message(s) for '{code}'", dict.len());
        out.push((code.to_string(), dict));
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}
