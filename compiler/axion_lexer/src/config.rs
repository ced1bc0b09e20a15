//! Scanner configuration.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::tables;

/// Options recognized by the scanner.
///
/// ```text
/// let config = LexerConfig::new()
///     .with_indentation_check(true)
///     .with_tab_width(4)
///     .with_custom_keyword("macro");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerConfig {
    /// Warn when an indentation run mixes characters.
    pub check_indentation_consistency: bool,
    /// Fixed tab width. `None` advances tabs to the next multiple of 8 until
    /// the indentation unit is known, then counts one unit per tab.
    pub tab_width: Option<u32>,
    /// Extra words scanned as [`TokenKind::CustomKeyword`](axion_ir::TokenKind::CustomKeyword).
    pub custom_keywords: FxHashSet<String>,
}

/// Invalid [`LexerConfig`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tab width must be at least 1")]
    ZeroTabWidth,
    #[error("custom keyword `{0}` is not a valid identifier")]
    InvalidCustomKeyword(String),
    #[error("custom keyword `{0}` shadows a built-in word")]
    ShadowedKeyword(String),
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indentation_check(mut self, enabled: bool) -> Self {
        self.check_indentation_consistency = enabled;
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, width: u32) -> Self {
        self.tab_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_custom_keyword(mut self, word: impl Into<String>) -> Self {
        self.custom_keywords.insert(word.into());
        self
    }

    pub fn is_custom_keyword(&self, word: &str) -> bool {
        self.custom_keywords.contains(word)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == Some(0) {
            return Err(ConfigError::ZeroTabWidth);
        }
        for word in &self.custom_keywords {
            if !is_plain_word(word) {
                return Err(ConfigError::InvalidCustomKeyword(word.clone()));
            }
            if tables::keyword(word).is_some() || tables::word_operator(word).is_some() {
                return Err(ConfigError::ShadowedKeyword(word.clone()));
            }
        }
        Ok(())
    }
}

/// Whether the word scanner would produce `word` as a single token.
fn is_plain_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(tables::is_identifier_start)
        && chars.all(tables::is_identifier_part)
        && !word.ends_with(tables::is_restricted_ending)
}

#[cfg(test)]
mod tests;
