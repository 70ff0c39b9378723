//! AI domain models.
//!
//! These types mirror the structured-output schemas the generation prompts
//! ask for, so a schema drift on either side fails deserialization instead
//! of silently producing garbage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Classification
// =============================================================================

/// Closed set of project categories the classifier may choose from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Industrial,
    Infrastructure,
    Institutional,
    Renovation,
    Landscaping,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Infrastructure => "infrastructure",
            Self::Institutional => "institutional",
            Self::Renovation => "renovation",
            Self::Landscaping => "landscaping",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality tier, affects material unit pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Standard,
    Premium,
    Luxury,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the description classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectClassification {
    pub project_type: ProjectType,
    pub quality_tier: QualityTier,
    /// Advisory prompt for the design-image flow; never required downstream.
    #[serde(default)]
    pub suggested_design_prompt: Option<String>,
}

// =============================================================================
// Blueprint analysis
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    Structural,
    Safety,
    Compliance,
    Mep,
    Design,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    High,
    Medium,
    Low,
}

/// A single issue flagged on an uploaded blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintWarning {
    pub category: WarningCategory,
    pub severity: WarningSeverity,
    pub description: String,
    pub recommendation: String,
}

/// Quantitative takeoffs from the drawing.
///
/// Area and line length stay free-text-with-units ("450 m²"); the model
/// produces display strings and the only numeric consumer extracts a prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintQuantities {
    pub area: String,
    pub total_line_length: String,
    #[serde(default)]
    pub object_counts: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredItem {
    pub item: String,
    pub reason: String,
}

/// Output of the blueprint analyzer. An empty warnings list means the model
/// found no issues, not that analysis was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintFindings {
    pub scope_summary: String,
    #[serde(default)]
    pub warnings: Vec<BlueprintWarning>,
    pub quantities: BlueprintQuantities,
    #[serde(default)]
    pub required_items: Vec<RequiredItem>,
}

// =============================================================================
// Market prices
// =============================================================================

/// Location- and quality-resolved unit prices handed to the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPriceSheet {
    pub material_unit_prices: BTreeMap<String, f64>,
    pub labor_rate_per_hour: f64,
    pub currency: String,
}

// =============================================================================
// Cost estimation
// =============================================================================

/// One bill-of-quantities line. `line_total` is expected to equal
/// `quantity * unit_price`; the producing model is instructed, not forced,
/// to keep that arithmetic consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoqLine {
    pub id: String,
    pub category: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewRecommendation {
    pub total_personnel: u32,
    #[serde(default)]
    pub role_breakdown: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub task_id: String,
    pub task_name: String,
    pub responsible_party: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: u32,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRisk {
    pub risk: String,
    pub mitigation: String,
}

/// Output of the cost estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub total_cost_label: String,
    pub bill_of_quantities: Vec<BoqLine>,
    pub crew_recommendation: CrewRecommendation,
    pub schedule_skeleton: Vec<ScheduleTask>,
    #[serde(default)]
    pub financial_risks: Vec<FinancialRisk>,
}

// =============================================================================
// Comprehensive plan
// =============================================================================

/// Input to the plan pipeline, consumed within a single run.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub project_name: String,
    pub project_description: String,
    pub location: String,
    /// Blueprint encoded as a self-describing data URI (image or PDF).
    #[serde(default)]
    pub blueprint_document: Option<String>,
}

/// Terminal aggregate of the pipeline; owns all step outputs by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensivePlan {
    pub project_name: String,
    pub location: String,
    pub classification: ProjectClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_analysis: Option<BlueprintFindings>,
    pub estimate: CostEstimate,
}

// =============================================================================
// Standalone flows
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub severity: WarningSeverity,
    pub mitigation: String,
}

/// Risk register produced from a project description, independent of any
/// blueprint warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risks: Vec<RiskItem>,
}

/// Marketing campaign copy for a completed project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingCampaign {
    pub headline: String,
    pub body: String,
    #[serde(default)]
    pub social_posts: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Exterior/interior render pair from the design-image flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignImages {
    pub exterior: String,
    pub interior: String,
}

/// Bilingual cover letter attached to a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCoverLetter {
    pub arabic: String,
    pub english: String,
}

// =============================================================================
// Request DTOs for API endpoints
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlueprintAnalysisRequest {
    /// Data URI of the uploaded drawing.
    pub document: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub location: String,
    pub size: String,
    pub project_type: ProjectType,
    pub quality_tier: QualityTier,
    pub scope_of_work: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DesignImagesRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskAnalysisRequest {
    pub description: String,
    pub location: String,
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketingRequest {
    pub project_name: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub target_audience: Option<String>,
}
