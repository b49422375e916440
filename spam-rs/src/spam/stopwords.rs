//! Automatic stop-word detection
//!
//! Stop words are picked from the training statistics: tokens seen at
//! least `stop_word_frequency` times whose spam fraction falls outside
//! the bias band. They are then stripped from the evaluation set.

use std::collections::HashSet;
use tracing::{debug, info};

use super::types::{TokenizedEmail, WordStatsTable};
use crate::config::ClassifierConfig;

/// Inclusive band of spam fractions counted as biased
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasBand {
    pub low: f64,
    pub high: f64,
}

impl Default for BiasBand {
    fn default() -> Self {
        Self { low: 0.3, high: 0.7 }
    }
}

impl BiasBand {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            low: config.bias_low,
            high: config.bias_high,
        }
    }

    /// True iff `spam_freq / total` lies in `[low, high]`
    pub fn is_biased(&self, total: u64, spam_freq: u64) -> bool {
        let frequency = spam_freq as f64 / total as f64;
        frequency >= self.low && frequency <= self.high
    }
}

/// Bias test with the default 0.3..=0.7 band
pub fn is_biased(total: u64, spam_freq: u64) -> bool {
    BiasBand::default().is_biased(total, spam_freq)
}

/// Set of tokens excluded from evidence
pub type StopWords = HashSet<String>;

/// Scan the table for frequent tokens that fail the bias test
pub fn detect_stop_words(table: &WordStatsTable, config: &ClassifierConfig) -> StopWords {
    let band = BiasBand::from_config(config);
    let threshold = config.stop_word_frequency;

    let stop_words: StopWords = table
        .iter()
        .filter(|(_, stats)| {
            stats.total >= threshold && !band.is_biased(stats.total, stats.spam_count)
        })
        .map(|(token, _)| token.to_string())
        .collect();

    info!(
        "Detected {} stop words (frequency >= {}, outside {:.2}..={:.2})",
        stop_words.len(),
        threshold,
        band.low,
        band.high
    );

    stop_words
}

/// Remove stop words from every email in place
pub fn remove_stop_words(emails: &mut [TokenizedEmail], stop_words: &StopWords) {
    if stop_words.is_empty() {
        return;
    }

    let mut removed = 0usize;
    for email in emails.iter_mut() {
        let before = email.tokens().len();
        email.retain_tokens(|token| !stop_words.contains(token));
        removed += before - email.tokens().len();
    }

    debug!("Removed {} stop-word occurrences from {} emails", removed, emails.len());
}
