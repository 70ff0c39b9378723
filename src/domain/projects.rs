use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ai::{ProjectType, QualityTier};

/// Project status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub status: ProjectStatus,
    pub project_type: Option<ProjectType>,
    pub quality_tier: Option<QualityTier>,
    /// Budget in SAR.
    pub budget: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a project
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub quality_tier: Option<QualityTier>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request DTO for updating a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub quality_tier: Option<QualityTier>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Project {
    pub fn new(owner_id: Uuid, req: CreateProjectRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: req.name,
            description: req.description,
            location: req.location,
            status: ProjectStatus::Draft,
            project_type: req.project_type,
            quality_tier: req.quality_tier,
            budget: req.budget,
            start_date: req.start_date,
            end_date: req.end_date,
            image_url: req.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; untouched fields keep their value.
    pub fn apply(&mut self, req: UpdateProjectRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(location) = req.location {
            self.location = location;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if req.project_type.is_some() {
            self.project_type = req.project_type;
        }
        if req.quality_tier.is_some() {
            self.quality_tier = req.quality_tier;
        }
        if req.budget.is_some() {
            self.budget = req.budget;
        }
        if req.start_date.is_some() {
            self.start_date = req.start_date;
        }
        if req.end_date.is_some() {
            self.end_date = req.end_date;
        }
        if req.image_url.is_some() {
            self.image_url = req.image_url;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_unset_fields() {
        let owner = Uuid::new_v4();
        let mut project = Project::new(
            owner,
            CreateProjectRequest {
                name: "Villa Narjis".into(),
                description: "Two-storey villa".into(),
                location: "Riyadh".into(),
                project_type: None,
                quality_tier: None,
                budget: Some(1_500_000.0),
                start_date: None,
                end_date: None,
                image_url: None,
            },
        );

        project.apply(UpdateProjectRequest {
            status: Some(ProjectStatus::InProgress),
            ..Default::default()
        });

        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.name, "Villa Narjis");
        assert_eq!(project.budget, Some(1_500_000.0));
        assert_eq!(project.owner_id, owner);
    }
}
