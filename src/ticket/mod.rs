//! Ticket classification data model shared by the adapters, the HTTP
//! handlers, and the embedded UI.

use serde::{Deserialize, Serialize};

/// Categories produced by the IT support-ticket model, plus the REVIEW
/// sentinel the upstream uses when the top prediction's confidence falls
/// below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketCategory {
    Access,
    #[serde(rename = "Administrative rights")]
    AdministrativeRights,
    #[serde(rename = "HR Support")]
    HrSupport,
    Hardware,
    #[serde(rename = "Internal Project")]
    InternalProject,
    Miscellaneous,
    Purchase,
    Storage,
    #[serde(rename = "REVIEW")]
    Review,
}

impl TicketCategory {
    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }
}

/// What a classifier adapter hands back. `category` is the final decision
/// and may be the REVIEW sentinel; `category_label` is always the real
/// top-1 prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: TicketCategory,
    pub category_label: TicketCategory,
    /// Confidence of the top prediction, in [0, 1].
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_used: Option<f64>,
    /// Top three candidates with their confidences, ordered descending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top3: Option<Vec<(TicketCategory, f64)>>,
}

impl ClassificationResult {
    /// Single-candidate result where the decision and the label coincide.
    pub fn flat(category: TicketCategory, confidence: f64) -> Self {
        Self {
            category,
            category_label: category,
            confidence,
            threshold_used: None,
            top3: None,
        }
    }
}

/// Result plus the display-correlation ticket ID minted by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketData {
    #[serde(flatten)]
    pub result: ClassificationResult,
    #[serde(rename = "ticketId")]
    pub ticket_id: String,
}

/// Uniform response envelope. `data` is never populated alongside
/// `success: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TicketData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TicketResponse {
    pub fn ok(data: TicketData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn categories_serialize_with_dataset_labels() {
        assert_eq!(
            serde_json::to_value(TicketCategory::AdministrativeRights).unwrap(),
            json!("Administrative rights")
        );
        assert_eq!(
            serde_json::to_value(TicketCategory::HrSupport).unwrap(),
            json!("HR Support")
        );
        assert_eq!(
            serde_json::to_value(TicketCategory::Review).unwrap(),
            json!("REVIEW")
        );
    }

    #[test]
    fn result_round_trips_with_top3_pairs() {
        let payload = json!({
            "category": "REVIEW",
            "category_label": "Access",
            "confidence": 0.42,
            "threshold_used": 0.6,
            "top3": [["Access", 0.42], ["Hardware", 0.31], ["Storage", 0.11]],
        });

        let result: ClassificationResult = serde_json::from_value(payload.clone()).unwrap();
        assert!(result.category.is_review());
        assert_eq!(result.category_label, TicketCategory::Access);
        assert_eq!(result.top3.as_ref().unwrap().len(), 3);

        assert_eq!(serde_json::to_value(&result).unwrap(), payload);
    }

    #[test]
    fn envelope_flattens_result_next_to_ticket_id() {
        let data = TicketData {
            result: ClassificationResult::flat(TicketCategory::Hardware, 0.88),
            ticket_id: "tkt-1700000000000000".to_string(),
        };

        let value = serde_json::to_value(TicketResponse::ok(data)).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["category"], json!("Hardware"));
        assert_eq!(value["data"]["ticketId"], json!("tkt-1700000000000000"));
        assert!(value["data"].get("threshold_used").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_envelope_carries_no_data() {
        let value = serde_json::to_value(TicketResponse::err("upstream down")).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("upstream down"));
        assert!(value.get("data").is_none());
    }
}
