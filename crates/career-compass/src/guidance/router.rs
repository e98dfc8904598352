use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::documents::ExtractedDocument;
use super::eligibility::{EligibilityRule, StudentProfile};
use super::intelligence::IntelligenceSummary;
use super::profile::UnifiedProfile;
use super::service::{AssessmentRequest, EligibilityReport, GuidanceAssessment, GuidanceService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuildProfileRequest {
    #[serde(default)]
    pub(crate) documents: Vec<ExtractedDocument>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    pub(crate) profile: StudentProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SynthesizeRequest {
    pub(crate) profile: UnifiedProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessmentPayload {
    #[serde(flatten)]
    pub(crate) request: AssessmentRequest,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

/// Router builder exposing the profile, eligibility, and intelligence endpoints.
pub fn guidance_router(service: Arc<GuidanceService>) -> Router {
    Router::new()
        .route("/api/v1/profile/build", post(build_profile_handler))
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .route("/api/v1/eligibility/rules", get(rules_handler))
        .route("/api/v1/intelligence/synthesize", post(synthesize_handler))
        .route("/api/v1/assessment", post(assessment_handler))
        .with_state(service)
}

pub(crate) async fn build_profile_handler(
    State(service): State<Arc<GuidanceService>>,
    Json(request): Json<BuildProfileRequest>,
) -> Json<UnifiedProfile> {
    Json(service.build_profile(&request.documents, request.name.as_deref()))
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<GuidanceService>>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EligibilityReport> {
    Json(service.evaluate(&request.profile))
}

pub(crate) async fn rules_handler(
    State(service): State<Arc<GuidanceService>>,
) -> Json<Vec<EligibilityRule>> {
    Json(service.catalog().rules().to_vec())
}

pub(crate) async fn synthesize_handler(
    State(service): State<Arc<GuidanceService>>,
    Json(request): Json<SynthesizeRequest>,
) -> Json<IntelligenceSummary> {
    Json(service.synthesize(&request.profile))
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<GuidanceService>>,
    Json(payload): Json<AssessmentPayload>,
) -> Json<GuidanceAssessment> {
    let today = payload
        .today
        .unwrap_or_else(|| Local::now().date_naive());
    Json(service.assess(payload.request, today))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
