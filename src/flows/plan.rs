//! Comprehensive plan pipeline.
//!
//! Linear sequence: classify the description, analyze the blueprint when one
//! was uploaded, merge both into an effective scope of work and a project
//! size, estimate the cost, assemble. Steps run strictly in order (the
//! estimator consumes the earlier outputs) and each external call is
//! attempted exactly once; a failed step aborts the run.

use chrono::NaiveDate;

use crate::domain::ai::{BlueprintFindings, ComprehensivePlan, PlanRequest};
use crate::error::ApiError;
use crate::services::GenerativeApi;

use super::{blueprint, classify, estimate, estimate::EstimateInput};

/// Project size assumed when no blueprint was supplied or its area string
/// carries no parseable number, in m².
pub const DEFAULT_PROJECT_SIZE: &str = "500";

/// Run the full pipeline for one plan request.
pub async fn generate_plan<G: GenerativeApi>(
    genai: &G,
    request: &PlanRequest,
    today: NaiveDate,
) -> Result<ComprehensivePlan, ApiError> {
    let classification = classify::classify_description(genai, &request.project_description).await?;
    tracing::debug!(
        project_type = %classification.project_type,
        quality_tier = %classification.quality_tier,
        "Description classified"
    );

    let blueprint_analysis = match &request.blueprint_document {
        Some(document) => Some(blueprint::analyze_blueprint(genai, document).await?),
        None => None,
    };

    let (effective_scope, project_size) = match &blueprint_analysis {
        Some(findings) => (
            merge_scope(&request.project_description, findings),
            leading_number(&findings.quantities.area)
                .unwrap_or(DEFAULT_PROJECT_SIZE)
                .to_string(),
        ),
        None => (
            request.project_description.clone(),
            DEFAULT_PROJECT_SIZE.to_string(),
        ),
    };

    let estimate = estimate::estimate_cost(
        genai,
        &EstimateInput {
            location: &request.location,
            size: &project_size,
            project_type: classification.project_type,
            quality_tier: classification.quality_tier,
            scope_of_work: &effective_scope,
            as_of: today,
        },
    )
    .await?;

    Ok(ComprehensivePlan {
        project_name: request.project_name.clone(),
        location: request.location.clone(),
        classification,
        blueprint_analysis,
        estimate,
    })
}

/// Effective scope of work: the user's description with the blueprint scope
/// and procurement list appended. The original description is never dropped.
fn merge_scope(description: &str, findings: &BlueprintFindings) -> String {
    let mut scope = String::with_capacity(
        description.len() + findings.scope_summary.len() + 64 * findings.required_items.len(),
    );
    scope.push_str(description);
    scope.push_str("\n\nScope identified on the blueprint:\n");
    scope.push_str(&findings.scope_summary);
    if !findings.required_items.is_empty() {
        scope.push_str("\n\nRequired materials:\n");
        for item in &findings.required_items {
            scope.push_str("- ");
            scope.push_str(&item.item);
            scope.push_str(" (");
            scope.push_str(&item.reason);
            scope.push_str(")\n");
        }
    }
    scope
}

/// Leading numeric token of a measurement string: "450 m²" → "450",
/// "620.5 m" → "620.5". Text without a numeric prefix yields None.
fn leading_number(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    Some(s[..end].trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ai::QualityTier;
    use crate::services::Prompt;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Deterministic stand-in for the generation API: canned output per
    /// prompt name, recorded inputs, optional failure injection.
    #[derive(Default)]
    struct FakeModel {
        outputs: HashMap<&'static str, Value>,
        fail_on: Option<&'static str>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl FakeModel {
        fn with_output(mut self, prompt: &'static str, output: Value) -> Self {
            self.outputs.insert(prompt, output);
            self
        }

        fn failing_on(mut self, prompt: &'static str) -> Self {
            self.fail_on = Some(prompt);
            self
        }

        fn calls_to(&self, prompt: &str) -> Vec<Value> {
            self.calls
                .lock()
                .iter()
                .filter(|(name, _)| name == prompt)
                .map(|(_, input)| input.clone())
                .collect()
        }
    }

    impl GenerativeApi for FakeModel {
        async fn generate(&self, prompt: &Prompt<'_>) -> Result<Value, ApiError> {
            self.calls
                .lock()
                .push((prompt.name.to_string(), prompt.input.clone()));
            if self.fail_on == Some(prompt.name) {
                return Err(ApiError::Upstream("injected failure".to_string()));
            }
            Ok(self
                .outputs
                .get(prompt.name)
                .cloned()
                .unwrap_or_else(|| panic!("no canned output for prompt {}", prompt.name)))
        }

        async fn generate_image(&self, _prompt: &str) -> Result<String, ApiError> {
            Ok("data:image/png;base64,stub".to_string())
        }
    }

    fn classification_output() -> Value {
        json!({
            "project_type": "residential",
            "quality_tier": "luxury",
            "suggested_design_prompt": "modern two-storey villa with a stone facade"
        })
    }

    fn blueprint_output(area: &str) -> Value {
        json!({
            "scope_summary": "Ground and first floor structural works with block walls",
            "warnings": [{
                "category": "compliance",
                "severity": "medium",
                "description": "Stair width below minimum",
                "recommendation": "Widen to 1.0 m per SBC 201"
            }],
            "quantities": {
                "area": area,
                "total_line_length": "320 m",
                "object_counts": { "doors": 12, "windows": 18, "columns": 24 }
            },
            "required_items": [
                { "item": "Rebar 16mm", "reason": "column reinforcement" },
                { "item": "Hollow blocks 20cm", "reason": "external walls" }
            ]
        })
    }

    fn estimate_output() -> Value {
        json!({
            "total_cost_label": "1,850,000 SAR",
            "bill_of_quantities": [
                {
                    "id": "boq-1",
                    "category": "structure",
                    "description": "Ready-mix concrete",
                    "unit": "m³",
                    "quantity": 300.0,
                    "unit_price": 245.0,
                    "line_total": 73500.0
                },
                {
                    "id": "boq-2",
                    "category": "finishing",
                    "description": "Finishing works, luxury tier",
                    "unit": "m²",
                    "quantity": 450.0,
                    "unit_price": 1200.0,
                    "line_total": 540000.0
                }
            ],
            "crew_recommendation": {
                "total_personnel": 14,
                "role_breakdown": { "site engineer": 1, "foreman": 2, "mason": 6, "laborer": 5 }
            },
            "schedule_skeleton": [{
                "task_id": "t-1",
                "task_name": "Mobilization",
                "responsible_party": "Contractor",
                "start_date": "2026-08-10",
                "end_date": "2026-08-17",
                "duration_days": 7,
                "progress_percent": 0.0
            }],
            "financial_risks": [
                { "risk": "Steel price volatility", "mitigation": "Lock supplier quotes early" }
            ]
        })
    }

    fn plan_request(blueprint: Option<&str>) -> PlanRequest {
        PlanRequest {
            project_name: "Villa Narjis".to_string(),
            project_description: "Two-storey luxury villa with a landscaped courtyard".to_string(),
            location: "Riyadh, KSA".to_string(),
            blueprint_document: blueprint.map(str::to_string),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[tokio::test]
    async fn without_blueprint_uses_default_size() {
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("estimate-cost", estimate_output());

        let plan = generate_plan(&model, &plan_request(None), today())
            .await
            .unwrap();

        assert!(plan.blueprint_analysis.is_none());
        assert_eq!(model.calls_to("analyze-blueprint").len(), 0);

        let estimate_inputs = model.calls_to("estimate-cost");
        assert_eq!(estimate_inputs.len(), 1);
        assert_eq!(estimate_inputs[0]["size"], "500");
        assert_eq!(
            estimate_inputs[0]["scope_of_work"],
            "Two-storey luxury villa with a landscaped courtyard"
        );
    }

    #[tokio::test]
    async fn blueprint_area_drives_project_size() {
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("analyze-blueprint", blueprint_output("450 m²"))
            .with_output("estimate-cost", estimate_output());

        let plan = generate_plan(&model, &plan_request(Some("data:image/png;base64,AAAA")), today())
            .await
            .unwrap();

        assert!(plan.blueprint_analysis.is_some());

        let estimate_inputs = model.calls_to("estimate-cost");
        assert_eq!(estimate_inputs[0]["size"], "450");
    }

    #[tokio::test]
    async fn unparseable_area_falls_back_to_default_size() {
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("analyze-blueprint", blueprint_output("approximately half a dunam"))
            .with_output("estimate-cost", estimate_output());

        generate_plan(&model, &plan_request(Some("data:image/png;base64,AAAA")), today())
            .await
            .unwrap();

        assert_eq!(model.calls_to("estimate-cost")[0]["size"], "500");
    }

    #[tokio::test]
    async fn merged_scope_keeps_original_description() {
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("analyze-blueprint", blueprint_output("450 m²"))
            .with_output("estimate-cost", estimate_output());

        let request = plan_request(Some("data:image/png;base64,AAAA"));
        generate_plan(&model, &request, today()).await.unwrap();

        let scope = model.calls_to("estimate-cost")[0]["scope_of_work"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(scope.contains(&request.project_description));
        assert!(scope.contains("Ground and first floor structural works"));
        assert!(scope.contains("- Rebar 16mm (column reinforcement)"));
    }

    #[tokio::test]
    async fn classification_carries_into_estimate_input() {
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("estimate-cost", estimate_output());

        let plan = generate_plan(&model, &plan_request(None), today())
            .await
            .unwrap();

        let input = &model.calls_to("estimate-cost")[0];
        assert_eq!(input["project_type"], "residential");
        assert_eq!(input["quality_tier"], "luxury");
        assert_eq!(input["as_of_date"], "2026-08-07");
        assert_eq!(plan.classification.quality_tier, QualityTier::Luxury);
    }

    #[tokio::test]
    async fn classifier_failure_aborts_before_later_steps() {
        let model = FakeModel::default()
            .failing_on("classify-project")
            .with_output("analyze-blueprint", blueprint_output("450 m²"))
            .with_output("estimate-cost", estimate_output());

        let result =
            generate_plan(&model, &plan_request(Some("data:image/png;base64,AAAA")), today()).await;

        assert!(matches!(result, Err(ApiError::Upstream(_))));
        assert_eq!(model.calls_to("analyze-blueprint").len(), 0);
        assert_eq!(model.calls_to("estimate-cost").len(), 0);
    }

    #[tokio::test]
    async fn boq_arithmetic_is_consistent() {
        // Not enforced by the pipeline; estimator output violating it is a
        // data-quality defect this assertion would surface.
        let model = FakeModel::default()
            .with_output("classify-project", classification_output())
            .with_output("estimate-cost", estimate_output());

        let plan = generate_plan(&model, &plan_request(None), today())
            .await
            .unwrap();

        for line in &plan.estimate.bill_of_quantities {
            assert!(
                (line.line_total - line.quantity * line.unit_price).abs() < 1e-6,
                "BOQ line {} breaks quantity × unit_price",
                line.id
            );
        }
    }

    #[test]
    fn leading_number_extraction() {
        assert_eq!(leading_number("450 m²"), Some("450"));
        assert_eq!(leading_number("  620.5 m"), Some("620.5"));
        assert_eq!(leading_number("450"), Some("450"));
        assert_eq!(leading_number("450.m²"), Some("450"));
        assert_eq!(leading_number("approximately 450 m²"), None);
        assert_eq!(leading_number(""), None);
    }
}
