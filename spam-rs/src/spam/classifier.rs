//! Classification engine
//!
//! Folds per-token posteriors into one spam probability under the naive
//! independence assumption:
//!
//! ```text
//! P(spam) = Πp / (Πp + Π(1 - p))
//! ```

use super::trainer::TrainedModel;
use super::types::Classification;
use crate::config::{ClassifierConfig, EvidenceCombination};

/// Aggregate probability of an email with no evidence (`1 / (1 + 1)`)
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Threshold-based spam classifier
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    spam_threshold: f64,
    combination: EvidenceCombination,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl Classifier {
    pub fn new(spam_threshold: f64, combination: EvidenceCombination) -> Self {
        Self {
            spam_threshold,
            combination,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.spam_threshold, config.combination)
    }

    /// Combine evidence and apply the threshold
    pub fn classify(&self, evidence: &[f64]) -> Classification {
        let probability = combine_evidence(evidence, self.combination);
        Classification {
            probability,
            // NaN (both products vanished) never reaches the threshold
            is_spam: probability >= self.spam_threshold,
        }
    }

    pub fn is_spam(&self, evidence: &[f64]) -> bool {
        self.classify(evidence).is_spam
    }

    /// Classify a token sequence against a trained model
    pub fn classify_tokens(&self, model: &TrainedModel, tokens: &[String]) -> Classification {
        self.classify(&model.evidence(tokens))
    }
}

/// Aggregate spam probability for a list of posteriors.
///
/// An empty list is an empty product on both sides and yields exactly
/// [`NEUTRAL_PROBABILITY`].
pub fn combine_evidence(evidence: &[f64], combination: EvidenceCombination) -> f64 {
    if evidence.is_empty() {
        return NEUTRAL_PROBABILITY;
    }

    match combination {
        EvidenceCombination::Product => combine_product(evidence),
        EvidenceCombination::LogSpace => combine_log_space(evidence),
    }
}

fn combine_product(evidence: &[f64]) -> f64 {
    let spam: f64 = evidence.iter().product();
    let not_spam: f64 = evidence.iter().map(|p| 1.0 - p).product();

    spam / (spam + not_spam)
}

fn combine_log_space(evidence: &[f64]) -> f64 {
    let spam = SignedLog::product(evidence.iter().copied());
    let not_spam = SignedLog::product(evidence.iter().map(|p| 1.0 - p));

    match (spam.is_zero(), not_spam.is_zero()) {
        (true, true) => f64::NAN,
        (true, false) => 0.0,
        (false, true) => 1.0,
        (false, false) => {
            // spam / (spam + not_spam) == 1 / (1 + not_spam / spam)
            let magnitude = (not_spam.ln_abs - spam.ln_abs).exp();
            let ratio = if spam.negative != not_spam.negative {
                -magnitude
            } else {
                magnitude
            };
            1.0 / (1.0 + ratio)
        }
    }
}

/// A product kept as `sign * exp(ln_abs)`; `ln_abs` is -inf for zero
#[derive(Debug, Clone, Copy)]
struct SignedLog {
    ln_abs: f64,
    negative: bool,
}

impl SignedLog {
    fn product(factors: impl Iterator<Item = f64>) -> Self {
        let mut acc = Self {
            ln_abs: 0.0,
            negative: false,
        };

        for factor in factors {
            if factor == 0.0 {
                acc.ln_abs = f64::NEG_INFINITY;
            } else if acc.ln_abs.is_finite() {
                acc.ln_abs += factor.abs().ln();
            }
            if factor < 0.0 {
                acc.negative = !acc.negative;
            }
        }

        acc
    }

    fn is_zero(&self) -> bool {
        self.ln_abs == f64::NEG_INFINITY
    }
}
