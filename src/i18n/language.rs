//! Language type: one locale's translation table.
//!
//! A `Language` is built once (by the loader, or directly by embedding code)
//! and never mutated afterwards, so it can be shared between threads through an
//! `Arc` without any locking of its own.

use std::collections::HashMap;

/// All translations for a specific locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Locale code (e.g., "en_US", "de_DE")
    locale: String,

    /// Display name of the language (e.g., "English (US)")
    name: String,

    /// Translation key to translated text
    translations: HashMap<String, String>,
}

impl Language {
    /// Create a Language from pre-existing data.
    ///
    /// The locale is stored as given. Checking it against the official list and
    /// stripping the display-name entry out of `translations` is the loader's job.
    ///
    /// # Example
    /// ```
    /// use bedrock_lang::i18n::Language;
    /// use std::collections::HashMap;
    ///
    /// let lang = Language::new("en_US", "English (US)", HashMap::new());
    /// assert_eq!(lang.locale(), "en_US");
    /// ```
    pub fn new(
        locale: impl Into<String>,
        name: impl Into<String>,
        translations: HashMap<String, String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            name: name.into(),
            translations,
        }
    }

    /// Get the locale code (e.g., "en_US").
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get the display name (e.g., "English (US)").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of translation keys in this language.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether this language has no translation keys at all.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Look up a translation key.
    ///
    /// A missing key is a normal outcome; the manager decides how to fall back.
    pub(crate) fn translation(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}
