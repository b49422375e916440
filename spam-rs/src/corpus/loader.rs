//! Corpus loading
//!
//! Reads one directory of flat files per class. The first character of
//! every file is the external reference label (`0` or `1`), the rest is
//! the body. Files are decoded as ISO-8859-1.

use encoding_rs::mem::decode_latin1;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::normalize::Normalizer;
use crate::config::CorpusConfig;
use crate::error::{Result, SpamError};
use crate::spam::{CorpusPriors, TokenizedEmail};

/// Every email that could be read, ham first
#[derive(Debug, Clone)]
pub struct Corpus {
    emails: Vec<TokenizedEmail>,
    spam_count: usize,
    ham_count: usize,
}

impl Corpus {
    pub fn emails(&self) -> &[TokenizedEmail] {
        &self.emails
    }

    pub fn into_emails(self) -> Vec<TokenizedEmail> {
        self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn spam_count(&self) -> usize {
        self.spam_count
    }

    pub fn ham_count(&self) -> usize {
        self.ham_count
    }

    /// Class priors over the whole corpus
    pub fn priors(&self) -> Result<CorpusPriors> {
        CorpusPriors::new(self.spam_count, self.ham_count)
    }
}

/// Loads the ham and spam directories
pub struct CorpusLoader {
    ham_dir: PathBuf,
    spam_dir: PathBuf,
    normalizer: Normalizer,
}

impl CorpusLoader {
    pub fn new<P: Into<PathBuf>>(ham_dir: P, spam_dir: P) -> Result<Self> {
        Ok(Self {
            ham_dir: ham_dir.into(),
            spam_dir: spam_dir.into(),
            normalizer: Normalizer::new()?,
        })
    }

    pub fn from_config(config: &CorpusConfig) -> Result<Self> {
        Self::new(&config.ham_dir, &config.spam_dir)
    }

    /// Load both directories. Unreadable files are logged and skipped,
    /// an unreadable directory aborts the load.
    pub fn load(&self) -> Result<Corpus> {
        let mut emails = self.read_dir(&self.ham_dir, false)?;
        let ham_count = emails.len();

        let spam = self.read_dir(&self.spam_dir, true)?;
        let spam_count = spam.len();
        emails.extend(spam);

        info!(
            "Loaded {} emails ({} ham, {} spam)",
            emails.len(),
            ham_count,
            spam_count
        );

        Ok(Corpus {
            emails,
            spam_count,
            ham_count,
        })
    }

    fn read_dir(&self, dir: &Path, is_spam: bool) -> Result<Vec<TokenizedEmail>> {
        let mut paths = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.sort();

        debug!("Reading {} files from {}", paths.len(), dir.display());

        let mut emails = Vec::with_capacity(paths.len());
        for path in paths {
            match self.read_email(&path, is_spam) {
                Ok(email) => emails.push(email),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(emails)
    }

    /// Read and tokenize a single corpus file
    pub fn read_email(&self, path: &Path, is_spam: bool) -> Result<TokenizedEmail> {
        let bytes = fs::read(path)?;
        let text = decode_latin1(&bytes);
        self.parse_email(&text, path, is_spam)
    }

    fn parse_email(&self, text: &str, path: &Path, is_spam: bool) -> Result<TokenizedEmail> {
        let mut chars = text.chars();
        let external_score = match chars.next() {
            None => return Err(SpamError::EmptyFile(path.to_path_buf())),
            Some('0') => 0.0,
            Some('1') => 1.0,
            Some(other) => {
                return Err(SpamError::InvalidLabel {
                    path: path.to_path_buf(),
                    label: other,
                })
            }
        };

        let tokens = self.normalizer.tokenize(chars.as_str());
        Ok(TokenizedEmail::new(tokens, is_spam, external_score))
    }
}
