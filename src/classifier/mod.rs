mod local;
mod remote;

pub use local::LocalClassifier;
pub use remote::RemoteClassifier;

use crate::{
    config::{ClassifierConfig, ClassifierMode},
    ticket::ClassificationResult,
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Strategy seam between the HTTP handlers and whatever produces the
/// classification: the hosted model API or the keyword stub.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, description: &str) -> Result<ClassificationResult>;
}

/// Builds the adapter selected by deployment configuration.
pub fn build(config: &ClassifierConfig) -> Result<Arc<dyn Classifier>> {
    match config.mode {
        ClassifierMode::Remote => Ok(Arc::new(RemoteClassifier::new(config.clone())?)),
        ClassifierMode::Local => Ok(Arc::new(LocalClassifier::new())),
    }
}
