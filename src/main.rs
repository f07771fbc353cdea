//! Language directory checker.
//!
//! Usage:
//!   bedrock-lang                                   # List loaded languages
//!   bedrock-lang <locale> <key> [token=value ...]  # Translate a key for a locale
//!
//! Optional environment variables:
//! - LANG_DIR (defaults to lang)
//! - LANG_DEFAULT_LOCALE (defaults to the first file loaded)

use anyhow::{Context, Result};
use bedrock_lang::config::Config;
use bedrock_lang::i18n::{Manager, Placeholders};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored if missing)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bedrock_lang=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let manager = Manager::new();
    let count = manager
        .register_dir(&config.lang_dir)
        .with_context(|| format!("Failed to load languages from {}", config.lang_dir.display()))?;
    info!("Loaded {} languages from {}", count, config.lang_dir.display());

    if let Some(locale) = &config.default_locale {
        manager.set_default(locale)?;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => list_languages(&manager),
        [locale, key, rest @ ..] => {
            let placeholders = parse_placeholders(rest)?;
            println!("{}", manager.translate(locale, key, &placeholders));
        }
        [_] => anyhow::bail!("Usage: bedrock-lang [<locale> <key> [token=value ...]]"),
    }

    Ok(())
}

fn list_languages(manager: &Manager) {
    let default = manager.default_language();
    for lang in manager.languages() {
        let marker = match &default {
            Some(d) if d.locale() == lang.locale() => " (default)",
            _ => "",
        };
        println!(
            "{}\t{}\t{} keys{}",
            lang.locale(),
            lang.name(),
            lang.len(),
            marker
        );
    }
}

fn parse_placeholders(args: &[String]) -> Result<Placeholders> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .with_context(|| format!("Placeholder '{}' must be token=value", arg))
        })
        .collect()
}
