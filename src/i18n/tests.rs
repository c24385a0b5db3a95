use super::*;

#[test]
fn test_language_codes() {
    assert_eq!(Language::from_code("EN"), Some(Language::En));
    assert_eq!(Language::from_code(" vi "), Some(Language::Vi));
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::Vi.code(), "vi");
}

#[test]
fn test_tables_have_same_keys() {
    let en = load_table(Language::En);
    let vi = load_table(Language::Vi);
    assert!(!en.is_empty());
    let mut en_keys: Vec<_> = en.keys().collect();
    let mut vi_keys: Vec<_> = vi.keys().collect();
    en_keys.sort();
    vi_keys.sort();
    assert_eq!(en_keys, vi_keys);
}

#[test]
fn test_unknown_key_returns_key() {
    let translator = Translator::new(Language::Vi);
    assert_eq!(translator.t("no_such_key"), "no_such_key");
}

#[test]
fn test_reload_switches_table() {
    let mut translator = Translator::new(Language::En);
    assert_eq!(translator.t("verb_delete"), "DELETE");

    translator.reload(Language::Vi);
    assert_eq!(translator.language(), Language::Vi);
    assert_eq!(translator.t("verb_delete"), "XÓA");
}

#[test]
fn test_format_substitutes_placeholders() {
    let translator = Translator::new(Language::En);
    assert_eq!(
        translator.format("step_failed", &[("step", "Configure path alias")]),
        "Configure path alias failed"
    );
}

#[test]
fn test_from_config_falls_back_to_english() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::load_from(dir.path().join("config.json")).unwrap();
    store.set(KEY_LANGUAGE, "klingon").unwrap();

    let translator = Translator::from_config(&store);
    assert_eq!(translator.language(), Language::En);
}
