use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by administrative operations and language loading.
///
/// Translation itself never fails; see [`crate::i18n::Manager::translate`].
#[derive(Debug, Error)]
pub enum LangError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot set default to an unregistered language: {0}")]
    NotFound(String),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("locale '{locale}' derived from {} is not a valid Minecraft locale", path.display())]
    InvalidLocale { path: PathBuf, locale: String },

    #[error("unsupported file format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to decode JSON from {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode YAML from {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("language file {} is missing the required 'language.name' key", path.display())]
    MissingName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, LangError>;
