use crate::error::{Result, SpamError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub classifier: ClassifierConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

/// Where the corpus priors come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorSource {
    /// Counted over every loaded email, before the split
    FullCorpus,
    /// Counted over the training subset only
    TrainingSet,
}

/// How per-token posteriors are folded into one probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCombination {
    /// Sum of logarithms, immune to underflow on long emails
    LogSpace,
    /// Plain products, underflows to 0/0 on long emails
    Product,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub ham_dir: String,
    pub spam_dir: String,
    pub split_ratio: f64,
    pub split_seed: Option<u64>,
    pub priors: PriorSource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub laplace: f64,
    pub spam_threshold: f64,
    pub stop_word_frequency: u64,
    pub bias_low: f64,
    pub bias_high: f64,
    pub combination: EvidenceCombination,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    pub enabled: bool,
    pub multiplier: f64,
    pub width: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            ham_dir: "data/mail".to_string(),
            spam_dir: "data/spam".to_string(),
            split_ratio: 0.8,
            split_seed: None,
            priors: PriorSource::FullCorpus,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            laplace: 1.0,
            spam_threshold: 0.5,
            stop_word_frequency: 400,
            bias_low: 0.3,
            bias_high: 0.7,
            combination: EvidenceCombination::LogSpace,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            multiplier: 10.0,
            width: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SpamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tunables outside the ranges the classifier can work with.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.corpus.split_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(invalid("corpus.split_ratio", ratio));
        }

        let classifier = &self.classifier;
        if !(classifier.laplace > 0.0) {
            return Err(invalid("classifier.laplace", classifier.laplace));
        }
        if !(0.0..=1.0).contains(&classifier.spam_threshold) {
            return Err(invalid(
                "classifier.spam_threshold",
                classifier.spam_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&classifier.bias_low)
            || !(0.0..=1.0).contains(&classifier.bias_high)
            || classifier.bias_low > classifier.bias_high
        {
            return Err(invalid(
                "classifier.bias_low..bias_high",
                format!("{}..{}", classifier.bias_low, classifier.bias_high),
            ));
        }

        if !(self.chart.multiplier > 0.0) {
            return Err(invalid("chart.multiplier", self.chart.multiplier));
        }

        Ok(())
    }
}

fn invalid(name: &str, value: impl ToString) -> SpamError {
    SpamError::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
    }
}
