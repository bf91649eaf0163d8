//! Serde default values for `Config` sections.

pub(super) fn default_name() -> String {
    "ACME Learning Center".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_locale() -> String {
    "en".to_string()
}
pub(super) fn default_fallback_locale() -> String {
    "en".to_string()
}
pub(super) fn default_true() -> bool {
    true
}
pub(super) fn default_base_url() -> String {
    "/".to_string()
}
pub(super) fn default_title_separator() -> String {
    " | ".to_string()
}
