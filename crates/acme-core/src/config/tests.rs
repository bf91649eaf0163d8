use super::*;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.app.name, "ACME Learning Center");
    assert_eq!(cfg.app.log_level, "info");
    assert_eq!(cfg.i18n.locale, "en");
    assert_eq!(cfg.i18n.fallback_locale, "en");
    assert!(cfg.i18n.global_injection);
    assert!(cfg.i18n.locales_dir.is_empty());
    assert_eq!(cfg.router.base_url, "/");
    assert_eq!(cfg.router.title_separator, " | ");
}

#[test]
fn test_config_from_empty_toml() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.app.name, "ACME Learning Center");
    assert_eq!(cfg.router.base_url, "/");
}

#[test]
fn test_config_partial_sections_keep_defaults() {
    let toml_str = r#"
        [i18n]
        locale = "es"

        [router]
        base_url = "/learning/"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.i18n.locale, "es");
    assert_eq!(cfg.i18n.fallback_locale, "en");
    assert!(cfg.i18n.global_injection);
    assert_eq!(cfg.router.base_url, "/learning/");
    assert_eq!(cfg.router.title_separator, " | ");
    assert_eq!(cfg.app.log_level, "info");
}

#[test]
fn test_config_global_injection_can_be_disabled() {
    let cfg: Config = toml::from_str("[i18n]\nglobal_injection = false\n").unwrap();
    assert!(!cfg.i18n.global_injection);
}

#[test]
fn test_env_override_replaces_base_url() {
    let mut cfg = Config::default();
    cfg.apply_overrides(|name| (name == BASE_URL_ENV).then(|| "/acme/".to_string()));
    assert_eq!(cfg.router.base_url, "/acme/");
}

#[test]
fn test_env_override_ignores_blank_value() {
    let mut cfg = Config::default();
    cfg.apply_overrides(|_| Some("   ".to_string()));
    assert_eq!(cfg.router.base_url, "/");
}

#[test]
fn test_validate_rejects_empty_locale() {
    let mut cfg = Config::default();
    cfg.i18n.locale = String::new();
    assert!(matches!(cfg.validate(), Err(AcmeError::Config(_))));
}

#[test]
fn test_validate_rejects_relative_base_url() {
    let mut cfg = Config::default();
    cfg.router.base_url = "app".into();
    assert!(cfg.validate().is_err());

    cfg.router.base_url = "/app".into();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__acme_test_config__.toml").unwrap();
    assert_eq!(cfg.app.name, "ACME Learning Center");
}

#[test]
fn test_load_reports_parse_errors() {
    let tmp = std::env::temp_dir().join("__acme_test_bad_config__.toml");
    std::fs::write(&tmp, "[i18n\nlocale = ").unwrap();
    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
    let _ = std::fs::remove_file(&tmp);
}
