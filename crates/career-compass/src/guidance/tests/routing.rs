use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::guidance::router::{evaluate_handler, EvaluateRequest};

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_handler_returns_results_and_summary() {
    let service = Arc::new(service());

    let Json(report) = evaluate_handler(
        State(service),
        Json(EvaluateRequest {
            profile: strong_student(),
        }),
    )
    .await;

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.summary.eligible, 3);
}

#[tokio::test]
async fn build_profile_route_accepts_camel_case_documents() {
    let router = router_with_service(service());
    let payload = json!({
        "name": "  Riya ",
        "documents": [
            {
                "fileName": "degree.pdf",
                "documentKind": "Transcript",
                "confidence": 0.9,
                "entities": { "educationLevel": "Bachelor", "gpa": 8.0 }
            },
            {
                "fileName": "hsc.pdf",
                "documentKind": "Marksheet",
                "confidence": 0.95,
                "entities": { "educationLevel": "12th", "percentage": 90 }
            }
        ]
    });

    let response = router
        .oneshot(post_json("/api/v1/profile/build", payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["personal"]["name"], "Riya");
    assert_eq!(body["gpa"], 6.25);
    assert_eq!(body["educationHistory"][0]["level"], "Bachelor");
    assert_eq!(body["educationHistory"][1]["score"], "90%");
}

#[tokio::test]
async fn evaluate_route_applies_country_filter() {
    let router = router_with_service(service());
    let payload = json!({
        "profile": {
            "percentage10": 88,
            "stream": "Computer Science",
            "percentageSubjects": { "Mathematics": 92 },
            "targetCountries": ["USA"]
        }
    });

    let response = router
        .oneshot(post_json("/api/v1/eligibility/evaluate", payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ids: Vec<&str> = body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|result| result["ruleId"].as_str())
        .collect();
    assert_eq!(ids, vec!["btech-cse", "open-arts"]);
    assert_eq!(body["summary"]["evaluated"], 2);
}

#[tokio::test]
async fn synthesize_route_reports_medium_risk_for_empty_profile() {
    let router = router_with_service(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/intelligence/synthesize",
            json!({ "profile": {} }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["riskLevel"], "Medium");
    assert_eq!(body["dominantStream"], "General");
}

#[tokio::test]
async fn rules_route_lists_catalog() {
    let router = router_with_service(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/eligibility/rules")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(body[1]["isInternational"], true);
}

#[tokio::test]
async fn assessment_route_uses_supplied_date() {
    let router = router_with_service(service());
    let payload = json!({
        "documents": serde_json::to_value(sample_documents()).expect("documents serialize"),
        "targetCountries": ["Germany"],
        "today": "2025-06-01"
    });

    let response = router
        .oneshot(post_json("/api/v1/assessment", payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["assessedOn"], "2025-06-01");
    assert_eq!(body["student"]["percentage10"], 88.0);
    assert_eq!(body["eligibility"]["summary"]["evaluated"], 3);
    assert_eq!(body["intelligence"]["dominantStream"], "STEM");
}

#[tokio::test]
async fn assessment_route_rejects_malformed_dates() {
    let router = router_with_service(service());
    let payload = json!({ "documents": [], "today": "June 1st" });

    let response = router
        .oneshot(post_json("/api/v1/assessment", payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
