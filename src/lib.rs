//! Localization helper for Bedrock server plugins.
//!
//! Loads per-locale translation tables from JSON or YAML files, keeps them in a
//! thread-safe [`i18n::Manager`], and resolves translation keys for a caller's
//! locale with fallback to a default language.

pub mod config;
pub mod i18n;
