//! Train/test split

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::spam::TokenizedEmail;

/// Shuffle `emails` and cut them at `floor(len * ratio)`.
///
/// Returns `(training, testing)`. Emails are moved, never cloned.
pub fn split_corpus<R: Rng + ?Sized>(
    mut emails: Vec<TokenizedEmail>,
    ratio: f64,
    rng: &mut R,
) -> (Vec<TokenizedEmail>, Vec<TokenizedEmail>) {
    emails.shuffle(rng);

    let cut = ((emails.len() as f64 * ratio) as usize).min(emails.len());
    let testing = emails.split_off(cut);

    debug!(
        "Split corpus into {} training and {} testing emails",
        emails.len(),
        testing.len()
    );

    (emails, testing)
}

/// Split with a seeded RNG when `seed` is set, the thread RNG otherwise
pub fn split_with_seed(
    emails: Vec<TokenizedEmail>,
    ratio: f64,
    seed: Option<u64>,
) -> (Vec<TokenizedEmail>, Vec<TokenizedEmail>) {
    match seed {
        Some(seed) => split_corpus(emails, ratio, &mut StdRng::seed_from_u64(seed)),
        None => split_corpus(emails, ratio, &mut rand::thread_rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Vec<TokenizedEmail> {
        (0..n)
            .map(|i| TokenizedEmail::new(vec![format!("token{}", i)], i % 2 == 0, 0.0))
            .collect()
    }

    #[test]
    fn test_split_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let (training, testing) = split_corpus(corpus(10), 0.8, &mut rng);
        assert_eq!(training.len(), 8);
        assert_eq!(testing.len(), 2);

        let (training, testing) = split_corpus(corpus(7), 0.8, &mut rng);
        assert_eq!(training.len(), 5);
        assert_eq!(testing.len(), 2);
    }

    #[test]
    fn test_split_keeps_every_email_once() {
        let (training, testing) = split_with_seed(corpus(25), 0.8, Some(3));

        let mut tokens: Vec<String> = training
            .iter()
            .chain(testing.iter())
            .map(|email| email.tokens()[0].clone())
            .collect();
        tokens.sort();

        let mut expected: Vec<String> = (0..25).map(|i| format!("token{}", i)).collect();
        expected.sort();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_seeded_split_is_reproducible() {
        let first = split_with_seed(corpus(30), 0.8, Some(99));
        let second = split_with_seed(corpus(30), 0.8, Some(99));
        assert_eq!(first, second);
    }
}
