use super::common::*;
use crate::guidance::eligibility::{evaluate, summarize, EligibilityEngine, StudentProfile};

#[test]
fn collects_every_failed_condition() {
    let mut profile = strong_student();
    profile.percentage10 = Some(50.0);
    profile.percentage_subjects.remove("Mathematics");

    let results = evaluate(&profile, &[engineering_rule()]);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(!result.is_eligible);
    assert_eq!(
        result.reasons,
        vec!["10th Grade Marks < 60%", "Missing/Low score in: Mathematics"]
    );
}

#[test]
fn strong_student_is_eligible_and_carries_rule_metadata() {
    let results = evaluate(&strong_student(), &[engineering_rule()]);

    let result = &results[0];
    assert!(result.is_eligible);
    assert!(result.reasons.is_empty());
    assert_eq!(result.rule_id, "btech-cse");
    assert_eq!(result.career_name, "B.Tech Computer Science");
    assert_eq!(result.admission_probability, 0.72);
    assert_eq!(result.roi, "High");
    assert_eq!(result.risk_level, "Medium");
    assert!(result.visa_probability.is_none());
    assert!(result.roadmap.is_some());
}

#[test]
fn international_rules_follow_target_countries() {
    let rules = vec![daad_rule()];
    let mut profile = strong_student();

    profile.target_countries = vec!["USA".to_string()];
    assert!(evaluate(&profile, &rules).is_empty());

    profile.target_countries = vec!["Germany".to_string()];
    let results = evaluate(&profile, &rules);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].visa_probability, Some(0.85));

    profile.target_countries = Vec::new();
    assert_eq!(evaluate(&profile, &rules).len(), 1);

    profile.target_countries = vec!["germany".to_string()];
    assert_eq!(evaluate(&profile, &rules).len(), 1);
}

#[test]
fn domestic_rules_never_report_visa_probability() {
    let results = evaluate(&strong_student(), &[open_rule()]);
    assert!(results[0].visa_probability.is_none());
}

#[test]
fn empty_profile_passes_all_zero_rules() {
    let results = evaluate(&StudentProfile::default(), &[open_rule(), daad_rule()]);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|result| result.is_eligible));
}

#[test]
fn ineligible_rules_are_still_reported() {
    let mut profile = strong_student();
    profile.stream = "Commerce".to_string();

    let results = evaluate(&profile, &[engineering_rule(), open_rule()]);

    assert_eq!(results.len(), 2);
    assert!(!results[0].is_eligible);
    assert_eq!(results[0].reasons, vec!["Requires Science background"]);
    assert!(results[1].is_eligible);
}

#[test]
fn repeated_evaluation_is_byte_identical() {
    let engine = EligibilityEngine::new(test_catalog());
    let mut profile = strong_student();
    profile.percentage12 = Some(40.0);

    let first = serde_json::to_vec(&engine.evaluate(&profile)).expect("serialize first run");
    let second = serde_json::to_vec(&engine.evaluate(&profile)).expect("serialize second run");

    assert_eq!(first, second);
}

#[test]
fn summary_ranks_eligible_matches_by_probability() {
    let results = evaluate(&strong_student(), &test_catalog().rules().to_vec());

    let summary = summarize(&results);

    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.eligible, 3);
    assert_eq!(summary.ineligible, 0);
    let ranked: Vec<&str> = summary
        .top_matches
        .iter()
        .map(|entry| entry.rule_id.as_str())
        .collect();
    assert_eq!(ranked, vec!["open-arts", "btech-cse", "daad-germany"]);
}
