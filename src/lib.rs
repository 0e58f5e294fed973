pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod sample;

pub use classifier::DigitClassifier;
pub use config::SmoothingConfig;
pub use error::{ModelError, SampleError};
pub use model::Model;
pub use report::ClassificationReport;
pub use sample::{samples, Sample, Shade};
