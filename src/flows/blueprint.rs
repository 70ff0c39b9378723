//! Blueprint analysis.
//!
//! One multimodal call over an uploaded architectural document (image or
//! PDF, passed as a data URI).

use serde_json::json;

use crate::domain::ai::BlueprintFindings;
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::parse_output;

const INSTRUCTIONS: &str = r#"You are a senior Saudi construction engineer reviewing an architectural drawing. Analyze the attached document and reply with JSON only:
{"scope_summary": "...", "warnings": [...], "quantities": {...}, "required_items": [...]}

scope_summary: a narrative summary of the scope of work shown on the drawing.

warnings: issues found on the drawing. Each entry is {"category", "severity", "description", "recommendation"}; category must be one of structural, safety, compliance, mep, design; severity one of high, medium, low. Reference the relevant Saudi Building Code (SBC) section in the recommendation where applicable. An empty list means no issues found.

quantities: {"area": total built-up area as text with units (e.g. "450 m²"), "total_line_length": total wall/line length as text with units, "object_counts": counts of distinct drawn objects such as doors, windows and columns, as a name-to-count map}.

required_items: materials to procure for this scope, each {"item", "reason"}."#;

/// Extract scope, warnings, takeoffs and a procurement list from a drawing.
pub async fn analyze_blueprint<G: GenerativeApi>(
    genai: &G,
    document_data_uri: &str,
) -> Result<BlueprintFindings, ApiError> {
    let output = genai
        .generate(&Prompt {
            name: "analyze-blueprint",
            instructions: INSTRUCTIONS,
            input: json!({}),
            media: Some(document_data_uri),
        })
        .await?;

    parse_output(output)
}
