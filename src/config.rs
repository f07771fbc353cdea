use crate::i18n::is_minecraft_locale;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Directory holding <locale>.json / <locale>.yml files
    pub lang_dir: PathBuf,

    // Explicit default locale; unset means the first registered language
    pub default_locale: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let lang_dir = non_blank_var("LANG_DIR").unwrap_or_else(|| "lang".to_string());

        let default_locale = non_blank_var("LANG_DEFAULT_LOCALE");
        if let Some(locale) = &default_locale {
            if !is_minecraft_locale(locale) {
                bail!("LANG_DEFAULT_LOCALE '{}' is not a valid Minecraft locale", locale);
            }
        }

        Ok(Self {
            lang_dir: PathBuf::from(lang_dir),
            default_locale,
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
