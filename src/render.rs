//! Plain-text rendering of prediction results.

use crate::types::Prediction;

/// Render a prediction as the multi-line result block.
///
/// Nutrition values render verbatim with unit suffixes when present; a
/// response without nutrition facts gets the fallback line instead.
pub fn prediction_text(prediction: &Prediction) -> String {
    let mut out = String::new();
    out.push_str(&format!("Label:      {}\n", prediction.label));
    out.push_str(&format!("Confidence: {}\n", prediction.confidence_percent()));
    out.push('\n');

    match &prediction.nutrition {
        Some(n) => {
            out.push_str("Nutrition Info (per serving):\n");
            out.push_str(&format!("  Calories: {}\n", n.calories));
            out.push_str(&format!("  Protein:  {} g\n", n.protein_g));
            out.push_str(&format!("  Fat:      {} g\n", n.fat_g));
            out.push_str(&format!("  Carbs:    {} g", n.carbs_g));
        }
        None => out.push_str("No nutrition info available."),
    }

    out
}
