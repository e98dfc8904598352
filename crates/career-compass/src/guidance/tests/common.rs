use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::guidance::documents::{DocumentKind, EducationLevel, ExtractedDocument};
use crate::guidance::eligibility::{
    AcademicStream, CurrentEducation, EligibilityRule, RuleKind, StudentProfile,
};
use crate::guidance::{guidance_router, RuleCatalog, GuidanceService};

pub(super) fn engineering_rule() -> EligibilityRule {
    EligibilityRule {
        id: "btech-cse".to_string(),
        name: "B.Tech Computer Science".to_string(),
        kind: RuleKind::DegreeProgram,
        min_percentage10: 60.0,
        min_percentage12: 70.0,
        required_stream: AcademicStream::Science,
        required_subjects: vec!["Mathematics".to_string()],
        min_subject_score: 60.0,
        admission_probability_base: 0.72,
        roi: "High".to_string(),
        risk_level: "Medium".to_string(),
        is_international: false,
        visa_probability_base: None,
        roadmap: Some(serde_json::json!({ "steps": ["Register for JEE Main"] })),
    }
}

pub(super) fn daad_rule() -> EligibilityRule {
    EligibilityRule {
        id: "daad-germany".to_string(),
        name: "DAAD Germany Scholarship".to_string(),
        kind: RuleKind::Scholarship,
        min_percentage10: 0.0,
        min_percentage12: 0.0,
        required_stream: AcademicStream::Any,
        required_subjects: Vec::new(),
        min_subject_score: 0.0,
        admission_probability_base: 0.3,
        roi: "Very High".to_string(),
        risk_level: "Medium".to_string(),
        is_international: true,
        visa_probability_base: Some(0.85),
        roadmap: None,
    }
}

pub(super) fn open_rule() -> EligibilityRule {
    EligibilityRule {
        id: "open-arts".to_string(),
        name: "Open Arts Foundation".to_string(),
        kind: RuleKind::CareerPath,
        min_percentage10: 0.0,
        min_percentage12: 0.0,
        required_stream: AcademicStream::Any,
        required_subjects: Vec::new(),
        min_subject_score: 0.0,
        admission_probability_base: 0.9,
        roi: "Moderate".to_string(),
        risk_level: "Low".to_string(),
        is_international: false,
        visa_probability_base: Some(0.5),
        roadmap: None,
    }
}

pub(super) fn strong_student() -> StudentProfile {
    let mut percentage_subjects = BTreeMap::new();
    percentage_subjects.insert("Mathematics".to_string(), 92.0);
    percentage_subjects.insert("Physics".to_string(), 85.0);

    StudentProfile {
        name: Some("Riya".to_string()),
        education_level: Some(CurrentEducation::HighSchool),
        percentage10: Some(88.0),
        percentage12: Some(82.0),
        stream: "Computer Science".to_string(),
        percentage_subjects,
        target_countries: Vec::new(),
    }
}

pub(super) fn test_catalog() -> RuleCatalog {
    RuleCatalog::new(vec![engineering_rule(), daad_rule(), open_rule()])
        .expect("test catalog validates")
}

pub(super) fn service() -> GuidanceService {
    GuidanceService::new(test_catalog())
}

pub(super) fn sample_documents() -> Vec<ExtractedDocument> {
    let mut hsc = ExtractedDocument::new("hsc_marksheet.pdf", DocumentKind::Marksheet)
        .with_level(EducationLevel::Twelfth)
        .with_percentage(82.0)
        .with_subject("Mathematics", 92.0)
        .with_subject("Physics", 85.0);
    hsc.entities.stream = Some("Science".to_string());
    hsc.entities.institution = Some("Kendriya Vidyalaya".to_string());
    hsc.entities.year = Some(2024);

    vec![
        ExtractedDocument::new("ssc_marksheet.pdf", DocumentKind::Marksheet)
            .with_level(EducationLevel::Tenth)
            .with_percentage(88.0),
        hsc,
        ExtractedDocument::new("ielts_scorecard.pdf", DocumentKind::ScoreCard).with_gpa(7.5),
        ExtractedDocument::new("python_for_everybody.pdf", DocumentKind::Certificate),
    ]
}

pub(super) fn router_with_service(service: GuidanceService) -> axum::Router {
    guidance_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
