//! Batch run
//!
//! Load → split → train → evaluate → detect stop words from the training
//! statistics → strip them from the test set → evaluate again.

use serde::Serialize;
use tracing::info;

use crate::chart::FrequencyChart;
use crate::config::{Config, PriorSource};
use crate::corpus::{split_with_seed, Corpus, CorpusLoader};
use crate::error::Result;
use crate::spam::{
    detect_stop_words, evaluate, remove_stop_words, train, Classifier, CorpusPriors,
    EvaluationReport,
};

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub corpus_size: usize,
    pub training_size: usize,
    pub testing_size: usize,
    pub vocabulary_size: usize,
    /// Evaluation with every token
    pub initial: EvaluationReport,
    /// Evaluation after stop-word removal
    pub filtered: EvaluationReport,
    /// Detected stop words, sorted
    pub stop_words: Vec<String>,
    #[serde(skip)]
    pub chart: Option<FrequencyChart>,
}

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the configured corpus and run every stage
    pub fn run(&self) -> Result<RunSummary> {
        let corpus = CorpusLoader::from_config(&self.config.corpus)?.load()?;
        self.run_on(corpus)
    }

    /// Run every stage on an already loaded corpus
    pub fn run_on(&self, corpus: Corpus) -> Result<RunSummary> {
        let corpus_config = &self.config.corpus;
        let classifier_config = &self.config.classifier;

        let corpus_size = corpus.len();
        // Full-corpus priors are fixed before the split
        let full_priors = match corpus_config.priors {
            PriorSource::FullCorpus => Some(corpus.priors()?),
            PriorSource::TrainingSet => None,
        };

        let (training, mut testing) = split_with_seed(
            corpus.into_emails(),
            corpus_config.split_ratio,
            corpus_config.split_seed,
        );

        let priors = match full_priors {
            Some(priors) => priors,
            None => CorpusPriors::from_emails(&training)?,
        };

        info!("Training on {} emails", training.len());
        let model = train(&training, priors, classifier_config)?;
        let classifier = Classifier::from_config(classifier_config);

        let initial = evaluate(&model, &classifier, &testing)?;
        info!("Initial accuracy: {:.4}", initial.accuracy);

        let stop_words = detect_stop_words(model.table(), classifier_config);
        remove_stop_words(&mut testing, &stop_words);

        let filtered = evaluate(&model, &classifier, &testing)?;
        info!("Accuracy without stop words: {:.4}", filtered.accuracy);

        let chart = self
            .config
            .chart
            .enabled
            .then(|| FrequencyChart::from_table(model.table(), self.config.chart.multiplier));

        let mut stop_words: Vec<String> = stop_words.into_iter().collect();
        stop_words.sort();

        Ok(RunSummary {
            corpus_size,
            training_size: training.len(),
            testing_size: testing.len(),
            vocabulary_size: model.table().vocabulary_size(),
            initial,
            filtered,
            stop_words,
            chart,
        })
    }
}
