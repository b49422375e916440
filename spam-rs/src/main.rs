use anyhow::Context;
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::pipeline::Pipeline;
use spam_rs::spam::EvaluationReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml").context("Failed to load config.toml")?
    } else {
        Config::default()
    };

    init_logging(&config.logging);

    info!("Starting spam-rs");
    info!("  Ham directory: {}", config.corpus.ham_dir);
    info!("  Spam directory: {}", config.corpus.spam_dir);

    let pipeline = Pipeline::new(config);
    let summary = pipeline.run()?;

    println!(
        "Corpus: {} emails ({} training, {} testing), vocabulary of {} tokens",
        summary.corpus_size, summary.training_size, summary.testing_size, summary.vocabulary_size
    );
    print_report("Initial", &summary.initial);

    println!("Stop words ({}): {}", summary.stop_words.len(), summary.stop_words.join(" "));
    print_report("Without stop words", &summary.filtered);

    if let Some(chart) = &summary.chart {
        print!("{}", chart.render(pipeline.config().chart.width));
    }

    Ok(())
}

fn print_report(label: &str, report: &EvaluationReport) {
    println!("{} accuracy: {:.4}", label, report.accuracy);
    println!("{} external reference accuracy: {:.4}", label, report.external_accuracy);
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}
