//! Internationalization (i18n) module for plugin translations.
//!
//! This module contains everything needed to turn a translation key into
//! display text for a given caller.
//!
//! # Architecture
//!
//! - `language`: A single locale's translation table
//! - `manager`: Thread-safe registry of languages with default-locale fallback
//! - `player`: The capability a caller needs (its locale code)
//! - `placeholders`: Per-call placeholder substitutions
//! - `locales`: Official Bedrock locale codes
//! - `loader`: JSON / YAML language file loading
//!
//! # Example
//!
//! ```rust
//! use bedrock_lang::i18n::{Language, Manager, Placeholders};
//! use std::collections::HashMap;
//!
//! let manager = Manager::new();
//! let english = Language::new(
//!     "en_US",
//!     "English (US)",
//!     HashMap::from([("greet.hello".to_string(), "Hi {name}".to_string())]),
//! );
//! manager.register(english).unwrap();
//!
//! let text = manager.translate("en_US", "greet.hello", &Placeholders::from([("{name}", "Alex")]));
//! assert_eq!(text, "Hi Alex");
//! ```

mod error;
mod language;
mod loader;
mod locales;
mod manager;
mod placeholders;
mod player;

pub use error::{LangError, Result};
pub use language::Language;
pub use loader::{load_language_dir, load_language_file, LANGUAGE_NAME_KEY};
pub use locales::{is_minecraft_locale, native_name, official_locales, LocaleInfo};
pub use manager::Manager;
pub use placeholders::Placeholders;
pub use player::Player;
