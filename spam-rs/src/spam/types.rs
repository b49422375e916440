//! Spam types and data structures

use std::collections::HashMap;

use crate::error::{Result, SpamError};

/// A normalized email ready for training or evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedEmail {
    tokens: Vec<String>,
    is_spam: bool,
    external_score: f64,
}

impl TokenizedEmail {
    /// Create a new email from its tokens and labels
    pub fn new(tokens: Vec<String>, is_spam: bool, external_score: f64) -> Self {
        Self {
            tokens,
            is_spam,
            external_score,
        }
    }

    /// Normalized tokens, in body order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Ground-truth label
    pub fn is_spam(&self) -> bool {
        self.is_spam
    }

    /// Verdict of the external reference classifier
    pub fn external_score(&self) -> f64 {
        self.external_score
    }

    /// Drop every token rejected by `keep`, preserving order
    pub(crate) fn retain_tokens<F>(&mut self, keep: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.tokens.retain(keep);
    }
}

/// Statistics collected for a single token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStats {
    /// Occurrences across all training emails
    pub total: u64,
    /// Occurrences inside spam emails
    pub spam_count: u64,
    /// Smoothed posterior P(spam | token)
    pub probability: f64,
}

/// Finalized per-token statistics, one entry per vocabulary word
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordStatsTable {
    entries: HashMap<String, WordStats>,
}

impl WordStatsTable {
    pub(crate) fn from_entries(entries: HashMap<String, WordStats>) -> Self {
        Self { entries }
    }

    pub fn get(&self, token: &str) -> Option<&WordStats> {
        self.entries.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of distinct tokens seen during training
    pub fn vocabulary_size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStats)> {
        self.entries.iter().map(|(token, stats)| (token.as_str(), stats))
    }
}

/// Class priors derived from email counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusPriors {
    spam_count: usize,
    ham_count: usize,
}

impl CorpusPriors {
    /// Build priors from class counts. Both classes must be present.
    pub fn new(spam_count: usize, ham_count: usize) -> Result<Self> {
        if spam_count == 0 || ham_count == 0 {
            return Err(SpamError::DegenerateCorpus {
                spam: spam_count,
                ham: ham_count,
            });
        }

        Ok(Self {
            spam_count,
            ham_count,
        })
    }

    /// Count classes over a set of emails
    pub fn from_emails(emails: &[TokenizedEmail]) -> Result<Self> {
        let spam = emails.iter().filter(|email| email.is_spam()).count();
        Self::new(spam, emails.len() - spam)
    }

    pub fn spam_count(&self) -> usize {
        self.spam_count
    }

    pub fn ham_count(&self) -> usize {
        self.ham_count
    }

    /// P(spam)
    pub fn spam(&self) -> f64 {
        self.spam_count as f64 / (self.spam_count + self.ham_count) as f64
    }

    /// P(ham)
    pub fn ham(&self) -> f64 {
        1.0 - self.spam()
    }
}

/// Result of classifying a single email
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Aggregate spam probability
    pub probability: f64,
    /// probability >= threshold
    pub is_spam: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priors_require_both_classes() {
        assert!(matches!(
            CorpusPriors::new(0, 3),
            Err(SpamError::DegenerateCorpus { spam: 0, ham: 3 })
        ));
        assert!(CorpusPriors::new(2, 0).is_err());

        let priors = CorpusPriors::new(1, 3).unwrap();
        assert_eq!(priors.spam(), 0.25);
        assert_eq!(priors.ham(), 0.75);
    }

    #[test]
    fn test_priors_from_emails() {
        let emails = vec![
            TokenizedEmail::new(vec!["a".into()], true, 1.0),
            TokenizedEmail::new(vec!["b".into()], false, 0.0),
            TokenizedEmail::new(vec!["c".into()], false, 0.0),
        ];

        let priors = CorpusPriors::from_emails(&emails).unwrap();
        assert_eq!(priors.spam_count(), 1);
        assert_eq!(priors.ham_count(), 2);
    }

    #[test]
    fn test_retain_tokens_preserves_order() {
        let mut email = TokenizedEmail::new(
            vec!["the".into(), "free".into(), "the".into(), "money".into()],
            true,
            1.0,
        );
        email.retain_tokens(|token| token != "the");
        assert_eq!(email.tokens(), ["free", "money"]);
    }
}
