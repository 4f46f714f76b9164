use std::thread;

use super::*;
use crate::language::Language;

fn single(name: &str, prefix: &str) -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new(
        name,
        vec![],
        CommentSyntax::new(vec![prefix], vec![]),
    ));
    registry
}

#[test]
fn lookup_reads_current_registry() {
    let shared = SharedRegistry::new(single("Conf", "#"));
    assert_eq!(shared.lookup("Conf").single_line, vec!["#"]);
    assert!(shared.lookup("Other").is_empty());
}

#[test]
fn replace_is_visible_through_clones() {
    let shared = SharedRegistry::new(single("Conf", "#"));
    let other = shared.clone();

    shared.replace(single("Conf", ";"));

    assert_eq!(other.lookup("Conf").single_line, vec![";"]);
}

#[test]
fn replace_drops_languages_not_in_new_registry() {
    let shared = SharedRegistry::new(single("Conf", "#"));
    shared.replace(single("Ini", ";"));

    assert!(shared.lookup("Conf").is_empty());
    assert!(!shared.lookup("Ini").is_empty());
}

#[test]
fn snapshot_is_stable_across_replace() {
    let shared = SharedRegistry::new(single("Conf", "#"));
    let before = shared.snapshot();

    shared.replace(LanguageRegistry::new());

    assert_eq!(before.lookup("Conf").single_line, vec!["#"]);
    assert!(shared.snapshot().is_empty());
}

#[test]
fn concurrent_reads_see_a_whole_registry() {
    let shared = SharedRegistry::new(single("Conf", "#"));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let prefixes = shared.lookup("Conf").single_line;
                    assert!(prefixes == vec!["#"] || prefixes == vec![";"]);
                }
            })
        })
        .collect();

    shared.replace(single("Conf", ";"));

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(shared.lookup("Conf").single_line, vec![";"]);
}
