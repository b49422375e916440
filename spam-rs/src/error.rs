use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Invalid external label in {path}: {label:?}")]
    InvalidLabel { path: PathBuf, label: char },

    #[error("Empty corpus file: {0}")]
    EmptyFile(PathBuf),

    #[error("Corpus needs both classes (spam: {spam}, ham: {ham})")]
    DegenerateCorpus { spam: usize, ham: usize },

    #[error("Training set contains no tokens")]
    EmptyTrainingSet,

    #[error("Evaluation set is empty")]
    EmptyEvaluationSet,
}

pub type Result<T> = std::result::Result<T, SpamError>;
