use super::domain::{AcademicStream, EligibilityRule, StudentProfile};
use super::stream::normalize_stream;

/// Country filter for international rules. The rule's display name stands in for a
/// structured country field, so matching is a case-insensitive substring test.
pub(crate) fn matches_target_countries(rule: &EligibilityRule, targets: &[String]) -> bool {
    if !rule.is_international {
        return true;
    }

    let mut targets = targets
        .iter()
        .map(|country| country.trim())
        .filter(|country| !country.is_empty())
        .peekable();
    if targets.peek().is_none() {
        return true;
    }

    let name = rule.name.to_lowercase();
    targets.any(|country| name.contains(&country.to_lowercase()))
}

/// Runs every condition and returns all failure reasons. An empty list means eligible.
pub(crate) fn failure_reasons(profile: &StudentProfile, rule: &EligibilityRule) -> Vec<String> {
    let mut reasons = Vec::new();

    if profile.percentage10.unwrap_or(0.0) < rule.min_percentage10 {
        reasons.push(format!("10th Grade Marks < {}%", rule.min_percentage10));
    }

    let checks_twelfth = profile
        .education_level
        .map(|level| level.checks_twelfth_grade())
        .unwrap_or(false);
    if checks_twelfth && profile.percentage12.unwrap_or(0.0) < rule.min_percentage12 {
        reasons.push(format!("12th Grade Marks < {}%", rule.min_percentage12));
    }

    let stream = normalize_stream(&profile.stream);
    if rule.required_stream != AcademicStream::Any
        && stream != rule.required_stream
        && stream != AcademicStream::Any
    {
        reasons.push(format!("Requires {} background", rule.required_stream));
    }

    let missing: Vec<&str> = rule
        .required_subjects
        .iter()
        .filter(|subject| {
            profile
                .percentage_subjects
                .get(subject.as_str())
                .map(|score| *score < rule.min_subject_score)
                .unwrap_or(true)
        })
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        reasons.push(format!("Missing/Low score in: {}", missing.join(", ")));
    }

    reasons
}
