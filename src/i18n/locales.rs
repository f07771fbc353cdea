//! Official Bedrock locale codes.
//!
//! This is the single source of truth the loader uses to reject language files
//! whose filename is not a locale the game client can report. The list mirrors
//! the game's own `language_names.json`.

/// An officially supported locale and its in-game display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    /// Locale code (e.g., "en_US", "pt_BR")
    pub code: &'static str,

    /// Name shown in the game's language picker (e.g., "Português (Brasil)")
    pub native_name: &'static str,
}

const MINECRAFT_LOCALES: &[LocaleInfo] = &[
    LocaleInfo { code: "en_US", native_name: "English (US)" },
    LocaleInfo { code: "en_GB", native_name: "English (UK)" },
    LocaleInfo { code: "de_DE", native_name: "Deutsch (Deutschland)" },
    LocaleInfo { code: "es_ES", native_name: "Español (España)" },
    LocaleInfo { code: "es_MX", native_name: "Español (México)" },
    LocaleInfo { code: "fr_FR", native_name: "Français (France)" },
    LocaleInfo { code: "fr_CA", native_name: "Français (Canada)" },
    LocaleInfo { code: "it_IT", native_name: "Italiano (Italia)" },
    LocaleInfo { code: "ja_JP", native_name: "日本語 (日本)" },
    LocaleInfo { code: "ko_KR", native_name: "한국어 (대한민국)" },
    LocaleInfo { code: "pt_BR", native_name: "Português (Brasil)" },
    LocaleInfo { code: "pt_PT", native_name: "Português (Portugal)" },
    LocaleInfo { code: "ru_RU", native_name: "Русский (Россия)" },
    LocaleInfo { code: "zh_CN", native_name: "简体中文 (中国)" },
    LocaleInfo { code: "zh_TW", native_name: "繁體中文 (台灣)" },
    LocaleInfo { code: "nl_NL", native_name: "Nederlands (Nederland)" },
    LocaleInfo { code: "bg_BG", native_name: "Български (BG)" },
    LocaleInfo { code: "cs_CZ", native_name: "Čeština (Česká republika)" },
    LocaleInfo { code: "da_DK", native_name: "Dansk (DA)" },
    LocaleInfo { code: "el_GR", native_name: "Ελληνικά (Ελλάδα)" },
    LocaleInfo { code: "fi_FI", native_name: "Suomi (Suomi)" },
    LocaleInfo { code: "hu_HU", native_name: "Magyar (HU)" },
    LocaleInfo { code: "id_ID", native_name: "Bahasa Indonesia (Indonesia)" },
    LocaleInfo { code: "nb_NO", native_name: "Norsk bokmål (Norge)" },
    LocaleInfo { code: "pl_PL", native_name: "Polski (PL)" },
    LocaleInfo { code: "sk_SK", native_name: "Slovensky (SK)" },
    LocaleInfo { code: "sv_SE", native_name: "Svenska (Sverige)" },
    LocaleInfo { code: "tr_TR", native_name: "Türkçe (Türkiye)" },
    LocaleInfo { code: "uk_UA", native_name: "Українська (Україна)" },
];

/// All officially supported locales, in the game's display order.
pub fn official_locales() -> &'static [LocaleInfo] {
    MINECRAFT_LOCALES
}

/// Check if a locale code is officially supported.
///
/// Matching is exact and case-sensitive: "en_US" is valid, "en_us" and "en-US" are not.
pub fn is_minecraft_locale(code: &str) -> bool {
    MINECRAFT_LOCALES.iter().any(|info| info.code == code)
}

/// Get the in-game display name for an official locale.
pub fn native_name(code: &str) -> Option<&'static str> {
    MINECRAFT_LOCALES
        .iter()
        .find(|info| info.code == code)
        .map(|info| info.native_name)
}
