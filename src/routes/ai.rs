//! AI endpoints backed by the hosted generation API.
//!
//! Each handler validates its input, runs one flow, and returns the typed
//! result. Nothing here is cached: generation inputs differ per call, and
//! the plan pipeline re-executes all of its steps on every invocation.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::ai::{
    BlueprintAnalysisRequest, BlueprintFindings, ClassifyRequest, ComprehensivePlan, CostEstimate,
    DesignImages, DesignImagesRequest, EstimateRequest, MarketingCampaign, MarketingRequest,
    PlanRequest, ProjectClassification, RiskAnalysisRequest, RiskAssessment,
};
use crate::error::{ApiError, ApiResult};
use crate::flows;
use crate::flows::estimate::EstimateInput;

fn require_text(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_data_uri(value: &str) -> Result<(), ApiError> {
    if !value.starts_with("data:") {
        return Err(ApiError::BadRequest(
            "document must be a data URI".to_string(),
        ));
    }
    Ok(())
}

/// Classify a free-text project description.
///
/// POST /ai/classify
pub async fn classify(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> ApiResult<DataResponse<ProjectClassification>> {
    require_text(&req.description, "description")?;

    let classification =
        flows::classify::classify_description(&state.genai, &req.description).await?;

    Ok(DataResponse::new(classification))
}

/// Analyze an uploaded blueprint document.
///
/// POST /ai/blueprint
pub async fn analyze_blueprint(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<BlueprintAnalysisRequest>,
) -> ApiResult<DataResponse<BlueprintFindings>> {
    require_data_uri(&req.document)?;

    let findings = flows::blueprint::analyze_blueprint(&state.genai, &req.document).await?;

    tracing::info!(
        warnings = findings.warnings.len(),
        area = %findings.quantities.area,
        "Blueprint analyzed"
    );

    Ok(DataResponse::new(findings))
}

/// Produce a cost estimate for an explicit scope.
///
/// POST /ai/estimate
pub async fn estimate(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<EstimateRequest>,
) -> ApiResult<DataResponse<CostEstimate>> {
    require_text(&req.location, "location")?;
    require_text(&req.scope_of_work, "scope_of_work")?;

    let estimate = flows::estimate::estimate_cost(
        &state.genai,
        &EstimateInput {
            location: &req.location,
            size: &req.size,
            project_type: req.project_type,
            quality_tier: req.quality_tier,
            scope_of_work: &req.scope_of_work,
            as_of: Utc::now().date_naive(),
        },
    )
    .await?;

    Ok(DataResponse::new(estimate))
}

/// Run the comprehensive plan pipeline.
///
/// POST /ai/plan
pub async fn generate_plan(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> ApiResult<DataResponse<ComprehensivePlan>> {
    require_text(&req.project_name, "project_name")?;
    require_text(&req.project_description, "project_description")?;
    require_text(&req.location, "location")?;
    if let Some(document) = &req.blueprint_document {
        require_data_uri(document)?;
    }

    tracing::info!(
        user_id = %auth.user_id,
        project_name = %req.project_name,
        has_blueprint = req.blueprint_document.is_some(),
        "Generating comprehensive plan"
    );

    let plan = flows::plan::generate_plan(&state.genai, &req, Utc::now().date_naive()).await?;

    Ok(DataResponse::new(plan))
}

/// Render the exterior/interior design-image pair.
///
/// POST /ai/design-images
pub async fn design_images(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<DesignImagesRequest>,
) -> ApiResult<DataResponse<DesignImages>> {
    require_text(&req.prompt, "prompt")?;

    let images = flows::design::generate_design_images(&state.genai, &req.prompt).await?;

    Ok(DataResponse::new(images))
}

/// Compile a risk register for a project description.
///
/// POST /ai/risks
pub async fn analyze_risks(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<RiskAnalysisRequest>,
) -> ApiResult<DataResponse<RiskAssessment>> {
    require_text(&req.description, "description")?;
    require_text(&req.location, "location")?;

    let assessment = flows::risks::analyze_risks(
        &state.genai,
        &req.description,
        &req.location,
        req.project_type,
    )
    .await?;

    Ok(DataResponse::new(assessment))
}

/// Generate marketing outreach copy for a project.
///
/// POST /ai/marketing
pub async fn marketing_campaign(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<MarketingRequest>,
) -> ApiResult<DataResponse<MarketingCampaign>> {
    require_text(&req.project_name, "project_name")?;

    let campaign = flows::marketing::generate_campaign(
        &state.genai,
        &req.project_name,
        req.project_type,
        req.target_audience.as_deref(),
    )
    .await?;

    Ok(DataResponse::new(campaign))
}
