//! Prediction result types returned by the service.

use serde::{Deserialize, Serialize};

/// Result of one classification request.
///
/// Mirrors the wire shape of `POST /predict/`: the label travels as
/// `prediction`, the confidence as a number in `[0, 1]`, and the nutrition
/// breakdown may be absent or `null` when the service has none to offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label for the uploaded image.
    #[serde(rename = "prediction")]
    pub label: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Nutrition facts for the predicted item, when the service knows them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Prediction {
    /// Confidence formatted as a percentage with two decimals, e.g.
    /// `0.8734` → `"87.34%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}
