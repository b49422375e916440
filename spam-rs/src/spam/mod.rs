//! Naive-Bayes spam classification
//!
//! Training, stop-word detection, classification and evaluation over
//! tokenized emails.

pub mod classifier;
pub mod evaluator;
pub mod stopwords;
pub mod trainer;
pub mod types;

pub use classifier::{combine_evidence, Classifier};
pub use evaluator::{evaluate, ConfusionMatrix, EvaluationReport};
pub use stopwords::{detect_stop_words, is_biased, remove_stop_words, BiasBand, StopWords};
pub use trainer::{train, TrainedModel};
pub use types::*;
