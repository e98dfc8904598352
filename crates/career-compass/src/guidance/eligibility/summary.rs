use serde::Serialize;

use super::domain::{EligibilityResult, RuleKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub rule_id: String,
    pub career_name: String,
    pub kind: RuleKind,
    pub kind_label: &'static str,
    pub admission_probability: f64,
    pub roi: String,
}

/// Dashboard view over a set of eligibility results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilitySummary {
    pub evaluated: usize,
    pub eligible: usize,
    pub ineligible: usize,
    pub top_matches: Vec<MatchEntry>,
}

/// Counts outcomes and ranks eligible matches by admission probability, highest first.
pub fn summarize(results: &[EligibilityResult]) -> EligibilitySummary {
    let mut top_matches: Vec<MatchEntry> = results
        .iter()
        .filter(|result| result.is_eligible)
        .map(|result| MatchEntry {
            rule_id: result.rule_id.clone(),
            career_name: result.career_name.clone(),
            kind: result.kind,
            kind_label: result.kind.label(),
            admission_probability: result.admission_probability,
            roi: result.roi.clone(),
        })
        .collect();
    top_matches.sort_by(|left, right| {
        right
            .admission_probability
            .total_cmp(&left.admission_probability)
    });

    let eligible = top_matches.len();
    EligibilitySummary {
        evaluated: results.len(),
        eligible,
        ineligible: results.len() - eligible,
        top_matches,
    }
}
