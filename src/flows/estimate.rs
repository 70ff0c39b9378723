//! Cost estimation.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::ai::{CostEstimate, ProjectType, QualityTier};
use crate::error::ApiError;
use crate::services::{GenerativeApi, Prompt};

use super::{parse_output, pricing};

const INSTRUCTIONS: &str = r#"You are a quantity surveyor preparing a construction cost estimate for the Saudi market. The input carries the project parameters and a market_prices sheet with the unit prices to use; do not invent prices of your own. Reply with JSON only:
{"total_cost_label": "...", "bill_of_quantities": [...], "crew_recommendation": {...}, "schedule_skeleton": [...], "financial_risks": [...]}

total_cost_label: the total estimated cost as a display string in the sheet's currency, e.g. "1,850,000 SAR".

bill_of_quantities: line items {"id", "category", "description", "unit", "quantity", "unit_price", "line_total"}. unit_price comes from market_prices; line_total must equal quantity times unit_price.

crew_recommendation: {"total_personnel", "role_breakdown"} where role_breakdown maps roles (site engineer, foreman, mason, ...) to headcounts summing to total_personnel.

schedule_skeleton: tasks {"task_id", "task_name", "responsible_party", "start_date", "end_date", "duration_days", "progress_percent"} starting from as_of_date, dates in ISO format, progress_percent 0.

financial_risks: {"risk", "mitigation"} entries covering cost exposure specific to this scope and location."#;

/// Parameters for one estimation run.
#[derive(Debug)]
pub struct EstimateInput<'a> {
    pub location: &'a str,
    /// Project size as display text, typically m² ("500").
    pub size: &'a str,
    pub project_type: ProjectType,
    pub quality_tier: QualityTier,
    pub scope_of_work: &'a str,
    pub as_of: NaiveDate,
}

/// Produce a cost estimate for the given scope.
///
/// The market price sheet is resolved locally and embedded in the request,
/// so pricing data is always present regardless of what the model does.
pub async fn estimate_cost<G: GenerativeApi>(
    genai: &G,
    input: &EstimateInput<'_>,
) -> Result<CostEstimate, ApiError> {
    let prices = pricing::resolve_prices(input.location, input.quality_tier);

    let output = genai
        .generate(&Prompt {
            name: "estimate-cost",
            instructions: INSTRUCTIONS,
            input: json!({
                "location": input.location,
                "size": input.size,
                "project_type": input.project_type,
                "quality_tier": input.quality_tier,
                "scope_of_work": input.scope_of_work,
                "as_of_date": input.as_of.to_string(),
                "market_prices": prices,
            }),
            media: None,
        })
        .await?;

    parse_output(output)
}
