//! Training engine
//!
//! Builds the word statistics table in two passes: counting, then a
//! posterior computation once every count and the corpus priors are final.

use std::collections::HashMap;
use tracing::{debug, info};

use super::types::*;
use crate::config::ClassifierConfig;
use crate::error::{Result, SpamError};

/// Occurrence counts accumulated during the first pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WordCounts {
    total: u64,
    spam: u64,
}

/// Everything the classifier needs after training
#[derive(Debug, Clone)]
pub struct TrainedModel {
    table: WordStatsTable,
    priors: CorpusPriors,
    laplace: f64,
}

impl TrainedModel {
    pub fn table(&self) -> &WordStatsTable {
        &self.table
    }

    /// Priors the posteriors were computed with
    pub fn priors(&self) -> CorpusPriors {
        self.priors
    }

    pub fn laplace(&self) -> f64 {
        self.laplace
    }

    /// Smoothing term `laplace / classes`, also the posterior of unseen tokens
    pub fn unseen_posterior(&self) -> f64 {
        self.laplace / self.table.vocabulary_size() as f64
    }

    /// Posterior for one token, falling back to the unseen value
    pub fn posterior(&self, token: &str) -> f64 {
        self.table
            .get(token)
            .map(|stats| stats.probability)
            .unwrap_or_else(|| self.unseen_posterior())
    }

    /// Per-token posteriors for an email body
    pub fn evidence(&self, tokens: &[String]) -> Vec<f64> {
        tokens.iter().map(|token| self.posterior(token)).collect()
    }
}

/// Train a model from labeled emails.
///
/// `priors` are passed in rather than counted here so the caller decides
/// whether they reflect the full corpus or only `emails`.
pub fn train(
    emails: &[TokenizedEmail],
    priors: CorpusPriors,
    config: &ClassifierConfig,
) -> Result<TrainedModel> {
    let counts = count_tokens(emails);
    if counts.is_empty() {
        return Err(SpamError::EmptyTrainingSet);
    }

    let classes = counts.len();
    let smoothing = config.laplace / classes as f64;

    debug!(
        "Counted {} distinct tokens over {} emails (P(spam) = {:.4})",
        classes,
        emails.len(),
        priors.spam()
    );

    let entries = counts
        .into_iter()
        .map(|(token, counts)| {
            let probability = word_posterior(counts.total, counts.spam, priors) + smoothing;
            let stats = WordStats {
                total: counts.total,
                spam_count: counts.spam,
                probability,
            };
            (token, stats)
        })
        .collect();

    info!("Trained on {} emails, vocabulary of {} tokens", emails.len(), classes);

    Ok(TrainedModel {
        table: WordStatsTable::from_entries(entries),
        priors,
        laplace: config.laplace,
    })
}

/// First pass: occurrence counts per distinct token
fn count_tokens(emails: &[TokenizedEmail]) -> HashMap<String, WordCounts> {
    let mut counts: HashMap<String, WordCounts> = HashMap::new();

    for email in emails {
        for token in email.tokens() {
            let entry = counts.entry(token.clone()).or_default();
            entry.total += 1;
            if email.is_spam() {
                entry.spam += 1;
            }
        }
    }

    counts
}

/// Bayes' rule for P(spam | word), without smoothing.
///
/// `total` is never zero: entries only exist after a first occurrence.
pub fn word_posterior(total: u64, spam_count: u64, priors: CorpusPriors) -> f64 {
    let word_in_spam = spam_count as f64 / total as f64;
    let word_in_ham = 1.0 - word_in_spam;

    let spam_term = word_in_spam * priors.spam();
    let ham_term = word_in_ham * priors.ham();

    spam_term / (spam_term + ham_term)
}
