//! Placeholder substitutions supplied per translation call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A set of placeholder substitutions, e.g. `{"{player}": "Steve"}`.
///
/// Tokens are matched literally; braces are just a naming convention. The set
/// (de)serializes as a plain JSON/YAML object.
///
/// # Example
/// ```
/// use bedrock_lang::i18n::Placeholders;
///
/// let p = Placeholders::new().with("{player}", "Steve").with("{world}", "overworld");
/// assert_eq!(p.apply("{player} entered {world}"), "Steve entered overworld");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholders(HashMap<String, String>);

impl Placeholders {
    /// Create an empty placeholder set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution, builder style.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Add a substitution, returning the previous value for that token.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(token.into(), value.into())
    }

    /// Get the replacement for a token.
    ///
    /// # Arguments
    /// * `token` - The literal token, braces included (e.g., "{player}")
    ///
    /// # Returns
    /// * `Some(&str)` if the token is in the set
    /// * `None` otherwise
    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    /// Number of tokens in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no tokens. An empty set leaves text untouched.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substitute every token occurrence in `text` in a single pass.
    ///
    /// Replacement text is never rescanned, so a value that looks like another
    /// token stays verbatim. Where tokens overlap at one position the longest
    /// one wins. Tokens absent from the set are left untouched, and empty
    /// tokens are ignored.
    ///
    /// # Arguments
    /// * `text` - The translated text containing tokens
    ///
    /// # Returns
    /// A new string with all known tokens replaced.
    pub fn apply(&self, text: &str) -> String {
        // Distinct token lengths, longest first
        let mut lengths: Vec<usize> = self
            .0
            .keys()
            .map(String::len)
            .filter(|&len| len > 0)
            .collect();
        if lengths.is_empty() {
            return text.to_string();
        }
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;
        while pos < text.len() {
            let matched = lengths.iter().find_map(|&len| {
                let candidate = text.get(pos..pos + len)?;
                self.get(candidate).map(|value| (len, value))
            });

            match matched {
                Some((len, value)) => {
                    out.push_str(&text[copied..pos]);
                    out.push_str(value);
                    pos += len;
                    copied = pos;
                }
                None => pos += text[pos..].chars().next().map_or(1, char::len_utf8),
            }
        }
        out.push_str(&text[copied..]);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(token, value)| (token.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Placeholders {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
