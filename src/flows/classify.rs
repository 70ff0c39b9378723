//! Project description classifier.

use serde_json::json;

use crate::domain::ai::ProjectClassification;
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::parse_output;

const INSTRUCTIONS: &str = r#"You are the intake assistant of a Saudi construction-management platform. The user describes a project in Arabic or English. Reply with JSON only:
{"project_type": "...", "quality_tier": "...", "suggested_design_prompt": "..."}

project_type must be exactly one of: residential, commercial, industrial, infrastructure, institutional, renovation, landscaping.

quality_tier must be exactly one of: standard, premium, luxury. Choose luxury when the description mentions "luxury", "فاخر" or "فخم"; premium when it mentions "premium", "ممتاز" or "جودة عالية"; otherwise standard.

When the description suggests a concrete visual concept, set suggested_design_prompt to a short English prompt for an architectural render of it; otherwise omit the field."#;

/// Map a free-text project description to a structured classification.
pub async fn classify_description<G: GenerativeApi>(
    genai: &G,
    description: &str,
) -> Result<ProjectClassification, ApiError> {
    let output = genai
        .generate(&Prompt {
            name: "classify-project",
            instructions: INSTRUCTIONS,
            input: json!({ "description": description }),
            media: None,
        })
        .await?;

    parse_output(output)
}
