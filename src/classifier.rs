use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{config::SmoothingConfig, model::Model, report::ClassificationReport, sample::Sample};

/// Entry point for callers that train, persist and apply a digit model.
#[derive(Debug, Default)]
pub struct DigitClassifier {
    model: Model,
}

impl DigitClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SmoothingConfig) -> Self {
        DigitClassifier {
            model: Model::with_config(config),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn build<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.model
            .build(path)
            .with_context(|| format!("failed to build model from {}", path.display()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Digit classifier saving model to file: {}", path.display());
        self.model
            .save(path)
            .with_context(|| format!("failed to save model to {}", path.display()))
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Digit classifier loading model from file: {}", path.display());
        self.model
            .load(path)
            .with_context(|| format!("failed to load model from {}", path.display()))
    }

    pub fn classify<P: AsRef<Path>>(&self, path: P) -> Result<ClassificationReport> {
        let path = path.as_ref();
        self.model
            .classify(path)
            .with_context(|| format!("failed to classify samples in {}", path.display()))
    }

    /// Classifies the single record stored in `path`.
    pub fn classify_one<P: AsRef<Path>>(&self, path: P) -> Result<u8> {
        let path = path.as_ref();
        let sample = Sample::from_path(path)
            .with_context(|| format!("failed to read sample from {}", path.display()))?;
        Ok(self.model.classify_sample(&sample)?)
    }

    pub fn predict<P: AsRef<Path>, Q: AsRef<Path>>(&self, inpath: P, outpath: Q) -> Result<usize> {
        let (inpath, outpath) = (inpath.as_ref(), outpath.as_ref());
        self.model.predict(inpath, outpath).with_context(|| {
            format!(
                "failed to write predictions for {} to {}",
                inpath.display(),
                outpath.display()
            )
        })
    }

    pub fn print(&self) {
        print!("{}", self.model);
    }

    pub fn sample_totals(&self) -> usize {
        self.model.sample_totals()
    }
}
