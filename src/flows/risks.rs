//! Standalone project risk analysis.
//!
//! Independent of the blueprint analyzer's warnings: this flow works from
//! the project description alone, before any drawing exists.

use serde_json::json;

use crate::domain::ai::{ProjectType, RiskAssessment};
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::parse_output;

const INSTRUCTIONS: &str = r#"You are a Saudi construction risk consultant. Given a project description, its location and its type, compile a risk register. Reply with JSON only:
{"risks": [{"risk": "...", "severity": "...", "mitigation": "..."}]}

severity must be one of high, medium, low. Cover the risks that actually follow from this scope and location (climate, logistics, permits, labor, ground conditions); do not pad the list with generic entries."#;

pub async fn analyze_risks<G: GenerativeApi>(
    genai: &G,
    description: &str,
    location: &str,
    project_type: ProjectType,
) -> Result<RiskAssessment, ApiError> {
    let output = genai
        .generate(&Prompt {
            name: "analyze-risks",
            instructions: INSTRUCTIONS,
            input: json!({
                "description": description,
                "location": location,
                "project_type": project_type,
            }),
            media: None,
        })
        .await?;

    parse_output(output)
}
