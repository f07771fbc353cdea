//! Language manager: registry of loaded languages with default-locale fallback.
//!
//! The manager is safe for concurrent use. Lookups and translations share a
//! read lock; registration and default changes take the write lock, so a
//! translation always sees a registry state from strictly before or strictly
//! after any write.

use crate::i18n::{LangError, Language, Placeholders, Player, Result};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, info_span, warn, Span};

/// Registry state guarded by a single lock.
#[derive(Debug, Default)]
struct State {
    languages: HashMap<String, Arc<Language>>,

    /// Locale of the default language. Always a key of `languages` when set,
    /// so re-registering that locale makes the new object the default.
    default_locale: Option<String>,
}

impl State {
    fn default_language(&self) -> Option<&Arc<Language>> {
        self.default_locale
            .as_deref()
            .and_then(|locale| self.languages.get(locale))
    }
}

/// A collection of languages for a plugin or server.
#[derive(Debug)]
pub struct Manager {
    state: RwLock<State>,

    /// Span all diagnostics are recorded under
    span: Span,
}

impl Manager {
    /// Create an empty manager logging under a `lang` span.
    pub fn new() -> Self {
        Self::with_span(info_span!("lang"))
    }

    /// Create an empty manager whose diagnostics are recorded under `span`.
    ///
    /// Use this to tag the manager's log lines with the owning plugin.
    pub fn with_span(span: Span) -> Self {
        Self {
            state: RwLock::new(State::default()),
            span,
        }
    }

    // A panic can't leave `State` half-written (every write is a single insert
    // or assignment), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a language. A language already registered for the same locale is
    /// replaced wholesale.
    ///
    /// The first language ever registered becomes the default.
    ///
    /// # Errors
    /// Returns [`LangError::InvalidArgument`] if the locale is empty.
    pub fn register(&self, language: impl Into<Arc<Language>>) -> Result<()> {
        let language = language.into();
        if language.locale().is_empty() {
            return Err(LangError::InvalidArgument(
                "language locale cannot be empty".to_string(),
            ));
        }

        let _enter = self.span.enter();
        let locale = language.locale().to_string();
        let mut state = self.write();

        let replaced = state.languages.insert(locale.clone(), language).is_some();
        debug!(locale = %locale, replaced, "Language registered");

        if state.default_locale.is_none() {
            info!(locale = %locale, "Default language set automatically");
            state.default_locale = Some(locale);
        }
        Ok(())
    }

    /// Set the default language used as a fallback. The locale must already be
    /// registered.
    ///
    /// # Errors
    /// Returns [`LangError::NotFound`] if no language is registered for
    /// `locale`; the previous default is kept.
    pub fn set_default(&self, locale: &str) -> Result<()> {
        let _enter = self.span.enter();
        let mut state = self.write();

        if !state.languages.contains_key(locale) {
            return Err(LangError::NotFound(locale.to_string()));
        }
        state.default_locale = Some(locale.to_string());
        info!(locale, "Default language changed");
        Ok(())
    }

    /// Get a registered language by its locale.
    pub fn language(&self, locale: &str) -> Option<Arc<Language>> {
        self.read().languages.get(locale).cloned()
    }

    /// Get the current default language, if any language has been registered.
    pub fn default_language(&self) -> Option<Arc<Language>> {
        self.read().default_language().cloned()
    }

    /// Snapshot of all registered languages, ordered by locale.
    ///
    /// Later registrations don't affect a snapshot already returned.
    pub fn languages(&self) -> Vec<Arc<Language>> {
        let mut languages: Vec<_> = self.read().languages.values().cloned().collect();
        languages.sort_by(|a, b| a.locale().cmp(b.locale()));
        languages
    }

    /// Translate `key` for `player`.
    ///
    /// Resolution order is the player's language, then the default language.
    /// The found text has `placeholders` substituted in a single pass.
    ///
    /// This never fails: with no default language configured, or when neither
    /// language has the key, the key itself is returned and the problem is
    /// logged.
    pub fn translate<P: Player + ?Sized>(
        &self,
        player: &P,
        key: &str,
        placeholders: &Placeholders,
    ) -> String {
        let _enter = self.span.enter();

        // Both languages come from one read of the registry; the guard is
        // released before substitution since languages are immutable.
        let (player_lang, default_lang) = {
            let state = self.read();
            let Some(default_lang) = state.default_language().cloned() else {
                error!(key, "Translation failed: no default language configured");
                return key.to_string();
            };
            (state.languages.get(player.locale()).cloned(), default_lang)
        };

        let text = player_lang
            .as_deref()
            .and_then(|lang| lang.translation(key))
            .or_else(|| default_lang.translation(key));

        let Some(text) = text else {
            warn!(
                key,
                fallback_locale = default_lang.locale(),
                "Translation key not found"
            );
            return key.to_string();
        };

        if placeholders.is_empty() {
            text.to_string()
        } else {
            placeholders.apply(text)
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
