//! Axum route handlers for the Skill Monetizer API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::monetizer::catalog::bundle_for;
use crate::monetizer::classifier::ClassificationRule;
use crate::monetizer::models::{OpportunityBundle, SkillCategory};
use crate::monetizer::skills::{SkillAction, SkillSet};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MonetizeRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MonetizeResponse {
    /// Skills as they were matched (trimmed, de-duplicated, original casing).
    pub skills: SkillSet,
    pub category: SkillCategory,
    pub opportunities: OpportunityBundle,
}

#[derive(Debug, Deserialize)]
pub struct SkillEditRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub action: SkillAction,
}

#[derive(Debug, Serialize)]
pub struct SkillEditResponse {
    pub skills: SkillSet,
    pub changed: bool,
    pub ready: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub rules: Vec<ClassificationRule>,
    pub fallback: SkillCategory,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/monetize
///
/// Classifies the submitted skills and returns the freelance / product / service paths.
pub async fn handle_monetize(
    State(state): State<AppState>,
    Json(request): Json<MonetizeRequest>,
) -> Result<Json<MonetizeResponse>, AppError> {
    let skills = SkillSet::from_inputs(request.skills);
    if !skills.is_ready() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let category = state.classifier.categorize(skills.as_slice())?;
    let opportunities = bundle_for(category);

    info!(
        skill_count = skills.as_slice().len(),
        category = category.as_str(),
        "Classified skill list"
    );
    for (kind, path) in opportunities.paths() {
        debug!(kind, title = %path.title, "Opportunity path");
    }

    Ok(Json(MonetizeResponse {
        skills,
        category,
        opportunities,
    }))
}

/// POST /api/v1/monetize/skills
///
/// Applies one edit (add / remove / clear) to a client-held skill list.
pub async fn handle_edit_skills(
    Json(request): Json<SkillEditRequest>,
) -> Result<Json<SkillEditResponse>, AppError> {
    let mut skills = SkillSet::from_inputs(request.skills);
    let changed = skills.apply(request.action);
    let ready = skills.is_ready();

    Ok(Json(SkillEditResponse {
        skills,
        changed,
        ready,
    }))
}

/// GET /api/v1/monetize/categories
///
/// Exposes the ordered rule table so clients can show why a category was picked.
pub async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        rules: state.classifier.rules().to_vec(),
        fallback: SkillCategory::General,
    })
}
