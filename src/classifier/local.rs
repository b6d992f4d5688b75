use super::Classifier;
use crate::{
    ticket::{ClassificationResult, TicketCategory},
    Result,
};
use async_trait::async_trait;
use tracing::debug;

/// Ordered keyword rules. The first rule whose keyword appears in the
/// lowercased description wins; there is no scoring or combination.
const RULES: &[(&[&str], TicketCategory, f64)] = &[
    (&["payment", "invoice"], TicketCategory::Purchase, 0.95),
    (&["wifi", "error", "screen"], TicketCategory::Hardware, 0.88),
    (&["contract", "vacation"], TicketCategory::HrSupport, 0.92),
];

const FALLBACK: (TicketCategory, f64) = (TicketCategory::Miscellaneous, 0.50);

/// Keyword stub used in deployments without a hosted model. Stands in for
/// the remote adapter behind the same trait.
pub struct LocalClassifier;

impl LocalClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Classifier for LocalClassifier {
    async fn classify(&self, description: &str) -> Result<ClassificationResult> {
        let haystack = description.to_lowercase();

        let (category, confidence) = RULES
            .iter()
            .find(|(keywords, _, _)| keywords.iter().any(|kw| haystack.contains(kw)))
            .map(|(_, category, confidence)| (*category, *confidence))
            .unwrap_or(FALLBACK);

        debug!(
            "Keyword stub classified description as {:?} at {}",
            category, confidence
        );

        Ok(ClassificationResult::flat(category, confidence))
    }
}
