//! Integration tests for the bedrock-lang library
//!
//! These tests exercise the loader and manager together, the way a plugin uses
//! them: language files on disk, a shared manager, many concurrent callers.

use bedrock_lang::i18n::{Language, Manager, Placeholders, Player};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// A connected player as the host server would model it
struct TestPlayer {
    name: String,
    locale: String,
}

impl Player for TestPlayer {
    fn locale(&self) -> &str {
        &self.locale
    }
}

fn player(name: &str, locale: &str) -> TestPlayer {
    TestPlayer {
        name: name.to_string(),
        locale: locale.to_string(),
    }
}

fn write_lang_dir(temp_dir: &TempDir) {
    std::fs::write(
        temp_dir.path().join("en_US.json"),
        r#"{
            "language.name": "English (US)",
            "greet.hello": "Hi {name}",
            "join.message": "{player} joined {world}",
            "only.english": "Fallback text"
        }"#,
    )
    .expect("Failed to write en_US.json");

    std::fs::write(
        temp_dir.path().join("es_MX.yml"),
        "language.name: Español (México)\ngreet.hello: \"Hola {name}\"\njoin.message: \"{player} entró a {world}\"\n",
    )
    .expect("Failed to write es_MX.yml");
}

fn language(locale: &str, pairs: &[(&str, &str)]) -> Language {
    Language::new(
        locale,
        locale,
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    )
}

// ==================== Loaded Directory Tests ====================

#[test]
fn test_round_trip_en_us() {
    let manager = Manager::new();
    manager
        .register(Language::new(
            "en_US",
            "English (US)",
            HashMap::from([("greet.hello".to_string(), "Hi {name}".to_string())]),
        ))
        .expect("register");

    let text = manager.translate(
        "en_US",
        "greet.hello",
        &Placeholders::from([("{name}", "Alex")]),
    );
    assert_eq!(text, "Hi Alex");
}

#[test]
fn test_loaded_directory_translates_per_player() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_lang_dir(&temp_dir);

    let manager = Manager::new();
    assert_eq!(manager.register_dir(temp_dir.path()).expect("load"), 2);
    manager.set_default("en_US").expect("set default");

    let steve = player("Steve", "en_US");
    let maria = player("Maria", "es_MX");
    let kenji = player("Kenji", "ja_JP");

    for p in [&steve, &maria, &kenji] {
        let text = manager.translate(
            p,
            "join.message",
            &Placeholders::new()
                .with("{player}", p.name.as_str())
                .with("{world}", "overworld"),
        );
        let expected = match p.locale.as_str() {
            "es_MX" => format!("{} entró a overworld", p.name),
            _ => format!("{} joined overworld", p.name),
        };
        assert_eq!(text, expected);
    }

    assert_eq!(
        manager.translate(&maria, "only.english", &Placeholders::new()),
        "Fallback text"
    );
    assert_eq!(
        manager.translate(&maria, "missing.key", &Placeholders::new()),
        "missing.key"
    );
}

#[test]
fn test_loaded_names_come_from_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_lang_dir(&temp_dir);

    let manager = Manager::new();
    manager.register_dir(temp_dir.path()).expect("load");

    let names: Vec<_> = manager
        .languages()
        .iter()
        .map(|l| (l.locale().to_string(), l.name().to_string()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("en_US".to_string(), "English (US)".to_string()),
            ("es_MX".to_string(), "Español (México)".to_string()),
        ]
    );
}

// ==================== Concurrency Tests ====================

#[test]
fn test_concurrent_register_then_translate() {
    let locales = ["en_US", "de_DE", "fr_FR", "ja_JP", "ko_KR", "pt_BR", "ru_RU", "zh_CN"];
    let manager = Arc::new(Manager::new());

    thread::scope(|s| {
        for locale in locales {
            let manager = Arc::clone(&manager);
            s.spawn(move || {
                let text = format!("hello from {}", locale);
                manager
                    .register(language(locale, &[("greet", text.as_str())]))
                    .expect("register");
            });
        }
    });

    assert_eq!(manager.languages().len(), locales.len());
    assert!(manager.default_language().is_some());

    thread::scope(|s| {
        for locale in locales {
            let manager = Arc::clone(&manager);
            s.spawn(move || {
                for _ in 0..100 {
                    let text = manager.translate(locale, "greet", &Placeholders::new());
                    assert_eq!(text, format!("hello from {}", locale));
                }
            });
        }
    });
}

#[test]
fn test_translate_during_default_changes() {
    let manager = Manager::new();
    manager
        .register(language("en_US", &[("side", "english")]))
        .expect("register");
    manager
        .register(language("de_DE", &[("side", "german")]))
        .expect("register");

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                let locale = if i % 2 == 0 { "de_DE" } else { "en_US" };
                manager.set_default(locale).expect("set default");
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..500 {
                    let text = manager.translate("fr_FR", "side", &Placeholders::new());
                    assert!(text == "english" || text == "german", "torn read: {}", text);
                }
            });
        }
    });
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_present_key_resolves_in_own_language(
        key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
        text in "[^{}]{0,40}",
    ) {
        let manager = Manager::new();
        manager.register(language("en_US", &[])).unwrap();
        manager.register(language("de_DE", &[(key.as_str(), text.as_str())])).unwrap();

        prop_assert_eq!(manager.translate("de_DE", &key, &Placeholders::new()), text);
    }

    #[test]
    fn prop_missing_key_returns_key(key in "\\PC{0,30}") {
        let manager = Manager::new();
        manager.register(language("en_US", &[])).unwrap();

        let p = Placeholders::from([("{a}", "x")]);
        prop_assert_eq!(manager.translate("de_DE", &key, &p), key);
    }

    #[test]
    fn prop_substitution_never_rescans(value in "[a-z{}]{0,12}", prefix in "[a-z ]{0,10}") {
        let p = Placeholders::from([("{a}", value.as_str()), ("{b}", "{a}")]);
        let text = format!("{}{{b}}", prefix);

        prop_assert_eq!(p.apply(&text), format!("{}{{a}}", prefix));
    }

    #[test]
    fn prop_text_without_tokens_unchanged(text in "[^{}]{0,60}") {
        let p = Placeholders::from([("{a}", "x"), ("{b}", "y")]);
        prop_assert_eq!(p.apply(&text), text);
    }
}
