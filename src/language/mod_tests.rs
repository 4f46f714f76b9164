use super::*;

#[test]
fn registry_contains_builtin_languages() {
    let registry = LanguageRegistry::builtin();

    assert!(registry.get_by_extension("rs").is_some());
    assert!(registry.get_by_extension("go").is_some());
    assert!(registry.get_by_extension("py").is_some());
    assert!(registry.contains("C++"));
    assert!(registry.contains("TypeScript"));
}

#[test]
fn registry_returns_none_for_unknown_extension() {
    let registry = LanguageRegistry::builtin();
    assert!(registry.get_by_extension("xyz").is_none());
}

#[test]
fn shared_registry_defaults_to_builtin() {
    let shared = SharedRegistry::default();
    assert_eq!(*shared.snapshot(), LanguageRegistry::builtin());
}
