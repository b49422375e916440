//! spam-rs: Naive-Bayes spam classifier
//!
//! Trains a word-probability model on a labeled local corpus, detects
//! stop words automatically and reports accuracy before and after
//! removing them.
//!
//! # Features
//!
//! - **Training**: per-token posteriors with a uniform Laplace term
//! - **Classification**: log-space evidence combination (or plain products)
//! - **Stop words**: frequent tokens whose spam fraction leaves the bias band
//! - **Evaluation**: accuracy against ground truth and an external reference
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::config::Config;
//! use spam_rs::pipeline::Pipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = Pipeline::new(Config::default()).run()?;
//!     println!("accuracy: {}", summary.initial.accuracy);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`corpus`]: Corpus loading, normalization and splitting
//! - [`spam`]: Training, stop words, classification and evaluation
//! - [`chart`]: Token frequency chart
//! - [`pipeline`]: The end-to-end batch run

pub mod chart;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
