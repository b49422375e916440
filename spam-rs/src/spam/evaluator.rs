//! Evaluation engine
//!
//! Runs the classifier over a held-out set and scores it against the
//! ground-truth labels and the external reference classifier.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::Classifier;
use super::trainer::TrainedModel;
use super::types::TokenizedEmail;
use crate::error::{Result, SpamError};

/// Outcome counts of a binary classification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    fn record(&mut self, predicted_spam: bool, actual_spam: bool) {
        match (predicted_spam, actual_spam) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (false, true) => self.false_negatives += 1,
        }
    }

    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    pub fn total(&self) -> usize {
        self.correct() + self.false_positives + self.false_negatives
    }

    /// Share of spam verdicts that were right, `None` without any
    pub fn precision(&self) -> Option<f64> {
        let predicted = self.true_positives + self.false_positives;
        (predicted > 0).then(|| self.true_positives as f64 / predicted as f64)
    }

    /// Share of actual spam that was caught, `None` without any
    pub fn recall(&self) -> Option<f64> {
        let actual = self.true_positives + self.false_negatives;
        (actual > 0).then(|| self.true_positives as f64 / actual as f64)
    }
}

/// Accuracy of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Fraction of emails whose verdict matches the ground truth
    pub accuracy: f64,
    /// Mean external reference score over the same emails
    pub external_accuracy: f64,
    pub confusion: ConfusionMatrix,
}

/// Classify every email and compare with its labels.
///
/// Fails with [`SpamError::EmptyEvaluationSet`] on an empty slice.
pub fn evaluate(
    model: &TrainedModel,
    classifier: &Classifier,
    emails: &[TokenizedEmail],
) -> Result<EvaluationReport> {
    if emails.is_empty() {
        return Err(SpamError::EmptyEvaluationSet);
    }

    let mut confusion = ConfusionMatrix::default();
    let mut external_sum = 0.0;

    for email in emails {
        let verdict = classifier.classify_tokens(model, email.tokens());
        confusion.record(verdict.is_spam, email.is_spam());
        external_sum += email.external_score();
    }

    let total = emails.len() as f64;
    let report = EvaluationReport {
        accuracy: confusion.correct() as f64 / total,
        external_accuracy: external_sum / total,
        confusion,
    };

    debug!(
        "Evaluated {} emails: {:?}",
        emails.len(),
        report.confusion
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::spam::trainer::train;
    use crate::spam::types::CorpusPriors;

    fn email(tokens: &[&str], is_spam: bool, external: f64) -> TokenizedEmail {
        TokenizedEmail::new(tokens.iter().map(|t| t.to_string()).collect(), is_spam, external)
    }

    fn model() -> TrainedModel {
        let emails = vec![
            email(&["free", "money", "now"], true, 1.0),
            email(&["free", "prize"], true, 1.0),
            email(&["meeting", "notes", "money"], false, 0.0),
            email(&["lunch", "notes"], false, 0.0),
        ];
        let priors = CorpusPriors::from_emails(&emails).unwrap();
        train(&emails, priors, &ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_evaluation_set_fails() {
        let err = evaluate(&model(), &Classifier::default(), &[]).unwrap_err();
        assert!(matches!(err, SpamError::EmptyEvaluationSet));
    }

    #[test]
    fn test_accuracy_and_external_accuracy() {
        let testing = vec![
            email(&["free", "prize"], true, 1.0),
            email(&["lunch", "notes"], false, 1.0),
            email(&["meeting", "notes"], false, 0.0),
            email(&["free", "money"], false, 0.0),
        ];

        let report = evaluate(&model(), &Classifier::default(), &testing).unwrap();

        // "free money" leans spam but is labeled ham
        assert_eq!(report.confusion.true_positives, 1);
        assert_eq!(report.confusion.true_negatives, 2);
        assert_eq!(report.confusion.false_positives, 1);
        assert_eq!(report.confusion.false_negatives, 0);
        assert_eq!(report.accuracy, 0.75);
        assert_eq!(report.external_accuracy, 0.5);
        assert_eq!(report.confusion.precision(), Some(0.5));
        assert_eq!(report.confusion.recall(), Some(1.0));
    }

    #[test]
    fn test_tokenless_email_counts_as_spam() {
        let testing = vec![email(&[], false, 0.0), email(&[], true, 1.0)];
        let report = evaluate(&model(), &Classifier::default(), &testing).unwrap();

        assert_eq!(report.confusion.false_positives, 1);
        assert_eq!(report.confusion.true_positives, 1);
        assert_eq!(report.accuracy, 0.5);
    }

    #[test]
    fn test_unseen_tokens_use_smoothing_term() {
        let model = model();
        // vocabulary: free money now prize meeting notes lunch
        assert_eq!(model.table().vocabulary_size(), 7);

        let verdict = Classifier::default().classify_tokens(&model, &["zebra".to_string()]);
        assert!((verdict.probability - 1.0 / 7.0).abs() < 1e-12);
        assert!(!verdict.is_spam);
    }

    #[test]
    fn test_confusion_ratios_without_predictions() {
        let confusion = ConfusionMatrix {
            true_negatives: 3,
            ..ConfusionMatrix::default()
        };
        assert_eq!(confusion.precision(), None);
        assert_eq!(confusion.recall(), None);
        assert_eq!(confusion.total(), 3);
    }
}
