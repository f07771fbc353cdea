//! Language file loading.
//!
//! A language file is a flat JSON or YAML object of translation keys to text,
//! named after its locale (`en_US.json`, `de_DE.yml`). It must carry a
//! `language.name` entry holding the display name; that entry is removed from
//! the translations.

use crate::i18n::{is_minecraft_locale, LangError, Language, Manager, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reserved key carrying a language's display name.
pub const LANGUAGE_NAME_KEY: &str = "language.name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Format::Json),
            "yml" | "yaml" => Some(Format::Yaml),
            _ => None,
        }
    }

    fn of(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Load a language file (JSON or YAML).
///
/// The locale is inferred from the filename, e.g. `lang/en_US.json` gives
/// "en_US", and must be an official Minecraft locale.
///
/// # Errors
/// Fails if the file can't be read, its locale is not official, its format is
/// unsupported or malformed, or it has no `language.name` key.
pub fn load_language_file(path: impl AsRef<Path>) -> Result<Language> {
    let path = path.as_ref();

    let data = fs::read_to_string(path).map_err(|source| LangError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let locale = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();
    if !is_minecraft_locale(&locale) {
        return Err(LangError::InvalidLocale {
            path: path.to_path_buf(),
            locale,
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let format = Format::from_extension(extension).ok_or_else(|| LangError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension.to_string(),
    })?;

    let mut translations: HashMap<String, String> = match format {
        Format::Json => serde_json::from_str(&data).map_err(|source| LangError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Yaml => serde_yaml::from_str(&data).map_err(|source| LangError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    let name = translations
        .remove(LANGUAGE_NAME_KEY)
        .ok_or_else(|| LangError::MissingName {
            path: path.to_path_buf(),
        })?;

    debug!(
        path = %path.display(),
        locale = %locale,
        keys = translations.len(),
        "Language file loaded"
    );
    Ok(Language::new(locale, name, translations))
}

/// Load every language file in a directory.
///
/// Files without a `.json`, `.yml` or `.yaml` extension are skipped. Files are
/// loaded in path order and the first failure aborts the whole load.
pub fn load_language_dir(dir: impl AsRef<Path>) -> Result<Vec<Language>> {
    let dir = dir.as_ref();
    let io_err = |source| LangError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && Format::of(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(load_language_file).collect()
}

impl Manager {
    /// Load every language file in `dir` and register them in path order.
    ///
    /// Nothing is registered if any file fails to load.
    ///
    /// # Returns
    /// The number of languages registered.
    pub fn register_dir(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir: PathBuf = dir.as_ref().to_path_buf();
        let languages = load_language_dir(&dir)?;
        let count = languages.len();

        for language in languages {
            self.register(language)?;
        }
        info!(path = %dir.display(), count, "Language directory loaded");
        Ok(count)
    }
}
