//! Marketing outreach copy.

use serde_json::json;

use crate::domain::ai::{MarketingCampaign, ProjectType};
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::parse_output;

const INSTRUCTIONS: &str = r#"You are the marketing copywriter of a Saudi construction company. Write outreach material for the given project. Reply with JSON only:
{"headline": "...", "body": "...", "social_posts": ["..."], "hashtags": ["..."]}

headline and body are bilingual-friendly (Arabic first, English second where natural). social_posts holds two or three short posts ready for publishing. hashtags are given without the # prefix."#;

pub async fn generate_campaign<G: GenerativeApi>(
    genai: &G,
    project_name: &str,
    project_type: ProjectType,
    target_audience: Option<&str>,
) -> Result<MarketingCampaign, ApiError> {
    let output = genai
        .generate(&Prompt {
            name: "marketing-campaign",
            instructions: INSTRUCTIONS,
            input: json!({
                "project_name": project_name,
                "project_type": project_type,
                "target_audience": target_audience,
            }),
            media: None,
        })
        .await?;

    parse_output(output)
}
