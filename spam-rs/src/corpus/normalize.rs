//! Text normalization
//!
//! Lowercases, strips accents through NFKD decomposition and drops every
//! character that is not an ASCII letter, digit or space.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Turns raw email bodies into normalized tokens
#[derive(Debug, Clone)]
pub struct Normalizer {
    disallowed: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            disallowed: Regex::new(r"[^A-Za-z0-9 ]+")?,
        })
    }

    /// Normalize a body into single-space separated words
    pub fn normalize(&self, text: &str) -> String {
        // Line breaks become separators; tabs and other whitespace are dropped
        let decomposed: String = text
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .to_lowercase()
            .nfkd()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let stripped = self.disallowed.replace_all(&decomposed, "");

        stripped
            .split(' ')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}
