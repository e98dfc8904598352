//! Rule matching of student profiles against the opportunity catalog.

pub mod domain;
mod rules;
mod stream;
mod summary;

pub use domain::{
    AcademicStream, CurrentEducation, EligibilityResult, EligibilityRule, RuleKind,
    StudentProfile,
};
pub use stream::normalize_stream;
pub use summary::{summarize, EligibilitySummary, MatchEntry};

use super::catalog::RuleCatalog;

/// Stateless matcher bound to a read-only rule catalog.
pub struct EligibilityEngine {
    catalog: RuleCatalog,
}

impl EligibilityEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, profile: &StudentProfile) -> Vec<EligibilityResult> {
        evaluate(profile, self.catalog.rules())
    }
}

/// Checks a profile against every rule, returning one result per rule that survives the
/// country filter. Ineligible rules are kept and carry all of their failure reasons.
pub fn evaluate(profile: &StudentProfile, rules: &[EligibilityRule]) -> Vec<EligibilityResult> {
    rules
        .iter()
        .filter(|rule| rules::matches_target_countries(rule, &profile.target_countries))
        .map(|rule| {
            let reasons = rules::failure_reasons(profile, rule);
            EligibilityResult {
                rule_id: rule.id.clone(),
                career_name: rule.name.clone(),
                kind: rule.kind,
                is_eligible: reasons.is_empty(),
                reasons,
                admission_probability: rule.admission_probability_base,
                roi: rule.roi.clone(),
                visa_probability: if rule.is_international {
                    rule.visa_probability_base
                } else {
                    None
                },
                risk_level: rule.risk_level.clone(),
                roadmap: rule.roadmap.clone(),
            }
        })
        .collect()
}
