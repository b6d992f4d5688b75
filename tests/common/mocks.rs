use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use triage_rust::{
    classifier::Classifier,
    ticket::ClassificationResult,
    Error, Result,
};

/// Mock classifier for testing. Answers from a queue of canned outcomes
/// and records every description it is asked to classify, so tests can
/// assert the adapter was (or was not) contacted.
pub struct MockClassifier {
    outcomes: Mutex<Vec<Result<ClassificationResult>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_result(self, result: ClassificationResult) -> Self {
        self.outcomes.lock().unwrap().push(Ok(result));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.outcomes.lock().unwrap().push(Err(error));
        self
    }

    /// Handle for inspecting recorded descriptions after the mock has been
    /// moved into the router state.
    pub fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requests)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, description: &str) -> Result<ClassificationResult> {
        self.requests.lock().unwrap().push(description.to_string());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::internal("No more mock outcomes available"));
        }

        outcomes.remove(0)
    }
}
