//! Integration tests for corpus loading

use spam_rs::corpus::CorpusLoader;
use spam_rs::SpamError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &[u8]) {
    fs::write(dir.join(name), contents).unwrap();
}

fn setup_corpus() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("mail")).unwrap();
    fs::create_dir(root.path().join("spam")).unwrap();
    root
}

#[test]
fn test_load_labels_and_tokens() {
    let root = setup_corpus();
    let ham = root.path().join("mail");
    let spam = root.path().join("spam");

    write(&ham, "001.txt", b"0Reuni\xe3o amanh\xe3, ok?");
    write(&ham, "002.txt", b"1Lunch at noon");
    write(&spam, "001.txt", b"1WIN a FREE prize!!!");

    let corpus = CorpusLoader::new(&ham, &spam).unwrap().load().unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.ham_count(), 2);
    assert_eq!(corpus.spam_count(), 1);

    let emails = corpus.emails();
    // Latin-1 bytes are decoded, then accents stripped
    assert_eq!(emails[0].tokens(), ["reuniao", "amanha", "ok"]);
    assert!(!emails[0].is_spam());
    assert_eq!(emails[0].external_score(), 0.0);

    assert_eq!(emails[1].external_score(), 1.0);

    assert!(emails[2].is_spam());
    assert_eq!(emails[2].tokens(), ["win", "a", "free", "prize"]);

    let priors = corpus.priors().unwrap();
    assert!((priors.spam() - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_c1_control_bytes_and_bare_carriage_returns() {
    let root = setup_corpus();
    let ham = root.path().join("mail");
    let spam = root.path().join("spam");

    // 0x99 is a C1 control in ISO-8859-1, not a trademark sign
    write(&ham, "001.txt", b"0brand\x99 free\rmoney");
    write(&spam, "001.txt", b"1\x80price\x9f drop");

    let corpus = CorpusLoader::new(&ham, &spam).unwrap().load().unwrap();
    let emails = corpus.emails();
    assert_eq!(emails[0].tokens(), ["brand", "free", "money"]);
    assert_eq!(emails[1].tokens(), ["price", "drop"]);
}

#[test]
fn test_bad_files_are_skipped() {
    let root = setup_corpus();
    let ham = root.path().join("mail");
    let spam = root.path().join("spam");

    write(&ham, "good.txt", b"0see you tomorrow");
    write(&ham, "empty.txt", b"");
    write(&ham, "unlabeled.txt", b"no label here");
    fs::create_dir(ham.join("nested")).unwrap();
    write(&spam, "good.txt", b"1cheap pills");

    let corpus = CorpusLoader::new(&ham, &spam).unwrap().load().unwrap();
    assert_eq!(corpus.ham_count(), 1);
    assert_eq!(corpus.spam_count(), 1);
}

#[test]
fn test_missing_directory_is_fatal() {
    let root = setup_corpus();
    let ham = root.path().join("mail");
    let missing = root.path().join("does-not-exist");

    let err = CorpusLoader::new(&ham, &missing).unwrap().load().unwrap_err();
    assert!(matches!(err, SpamError::Io(_)));
}

#[test]
fn test_single_class_corpus_has_no_priors() {
    let root = setup_corpus();
    let ham = root.path().join("mail");
    let spam = root.path().join("spam");
    write(&ham, "a.txt", b"0hello");

    let corpus = CorpusLoader::new(&ham, &spam).unwrap().load().unwrap();
    let err = corpus.priors().unwrap_err();
    assert!(matches!(err, SpamError::DegenerateCorpus { spam: 0, ham: 1 }));
}
