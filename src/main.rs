use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use digit_bayes::{DigitClassifier, SmoothingConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Train, save, load and apply a naive Bayes digit classifier.
///
/// Steps run in the order train, save, load, classify, predict, print. A failing
/// step is reported and the remaining steps still run.
#[derive(Parser, Debug)]
#[command(name = "digit-bayes", version)]
struct Cli {
    /// Training data file to train the model
    #[arg(long)]
    train: Option<PathBuf>,

    /// Save the model to a file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Load the model from a file
    #[arg(long)]
    load: Option<PathBuf>,

    /// Classify the labeled samples in a file and report accuracy
    #[arg(long)]
    classify: Option<PathBuf>,

    /// Classify the single sample in a file
    #[arg(long)]
    classify_one: Option<PathBuf>,

    /// Classify samples and write predictions to the CSV file given by --output
    #[arg(long, requires = "output")]
    predict: Option<PathBuf>,

    /// CSV file that receives the predictions from --predict
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the model
    #[arg(long)]
    print: bool,

    /// Laplace smoothing pseudo-count, finite and positive
    #[arg(long, default_value = "1", value_parser = parse_smoothing)]
    laplace: SmoothingConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let mut classifier = DigitClassifier::with_config(cli.laplace);

    if let Some(path) = &cli.train {
        report(classifier.build(path));
    }
    if let Some(path) = &cli.save {
        report(classifier.save(path));
    }
    if let Some(path) = &cli.load {
        report(classifier.load(path));
    }
    if let Some(path) = &cli.classify {
        if let Some(accuracy) = report(classifier.classify(path)) {
            print!("{accuracy}");
        }
    }
    if let Some(path) = &cli.classify_one {
        if let Some(digit) = report(classifier.classify_one(path)) {
            println!("Predicted digit: {digit}");
        }
    }
    if let (Some(inpath), Some(outpath)) = (&cli.predict, &cli.output) {
        if let Some(count) = report(classifier.predict(inpath, outpath)) {
            println!("Wrote {count} predictions to {}", outpath.display());
        }
    }
    if cli.print {
        classifier.print();
    }

    Ok(())
}

fn report<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!("{err:#}");
            None
        }
    }
}

/// `RUST_LOG` when it is set and valid, otherwise info-level logging for this crate.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("digit_bayes=info"))
}

fn parse_smoothing(value: &str) -> std::result::Result<SmoothingConfig, String> {
    let pseudo_count: f64 = value
        .parse()
        .map_err(|err| format!("invalid pseudo-count {value:?}: {err}"))?;
    SmoothingConfig::with_pseudo_count(pseudo_count).map_err(|err| err.to_string())
}
