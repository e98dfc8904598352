//! Summary statistics for the student dashboard.
//!
//! Only the dominant stream and risk level are computed from the profile; country figures
//! come from a fixed reference table.

mod reference;
pub mod views;

pub use views::{CountryOutlook, DominantStream, IntelligenceSummary, RiskLevel};

use super::profile::UnifiedProfile;

const STEM_KEYWORDS: [&str; 4] = ["Math", "Physics", "CS", "Data"];
const COMMERCE_KEYWORDS: [&str; 3] = ["Business", "Account", "Econ"];
const RISK_GPA_THRESHOLD: f64 = 3.0;

pub fn synthesize(profile: &UnifiedProfile) -> IntelligenceSummary {
    let dominant_stream = profile
        .top_subject()
        .map(|entry| classify_subject(&entry.subject))
        .unwrap_or(DominantStream::General);

    let risk_level = if profile.gpa > RISK_GPA_THRESHOLD {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    };

    let mut risk_factors = Vec::new();
    if profile.gpa < RISK_GPA_THRESHOLD {
        risk_factors.push(format!("GPA below {RISK_GPA_THRESHOLD:.1}"));
    }
    if profile.entrance_scores.is_empty() {
        risk_factors.push("No entrance exam scores on record".to_string());
    }

    IntelligenceSummary {
        dominant_stream,
        gpa: profile.gpa,
        risk_level,
        risk_factors,
        top_subjects: profile.subject_strength.clone(),
        country_outlook: reference::country_outlook(dominant_stream),
        recommended_careers: reference::recommended_careers(dominant_stream),
    }
}

/// Keyword membership test; matching is case sensitive so "Economics" is not read as "CS".
fn classify_subject(subject: &str) -> DominantStream {
    if STEM_KEYWORDS.iter().any(|keyword| subject.contains(keyword)) {
        DominantStream::Stem
    } else if COMMERCE_KEYWORDS
        .iter()
        .any(|keyword| subject.contains(keyword))
    {
        DominantStream::Commerce
    } else {
        DominantStream::ArtsHumanities
    }
}
