//! Corpus handling
//!
//! Loading of the labeled directories, text normalization and the
//! shuffled train/test split.

pub mod loader;
pub mod normalize;
pub mod split;

pub use loader::{Corpus, CorpusLoader};
pub use normalize::Normalizer;
pub use split::{split_corpus, split_with_seed};
