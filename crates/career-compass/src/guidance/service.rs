use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::{RuleCatalog, RuleCatalogError};
use super::documents::ExtractedDocument;
use super::eligibility::{
    summarize, EligibilityEngine, EligibilityResult, EligibilitySummary, StudentProfile,
};
use super::intelligence::{synthesize, IntelligenceSummary};
use super::profile::{build_profile, UnifiedProfile};

/// Eligibility results together with their dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub results: Vec<EligibilityResult>,
    pub summary: EligibilitySummary,
}

/// Inputs for a full documents-to-dashboard run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub documents: Vec<ExtractedDocument>,
    #[serde(default)]
    pub target_countries: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceAssessment {
    pub assessed_on: NaiveDate,
    pub profile: UnifiedProfile,
    pub student: StudentProfile,
    pub eligibility: EligibilityReport,
    pub intelligence: IntelligenceSummary,
}

/// Facade over the aggregator, matcher, and synthesizer sharing one read-only catalog.
pub struct GuidanceService {
    engine: Arc<EligibilityEngine>,
}

impl GuidanceService {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            engine: Arc::new(EligibilityEngine::new(catalog)),
        }
    }

    /// Loads the catalog from `rules_path`, or falls back to the built-in table.
    pub fn from_rules_path(rules_path: Option<&Path>) -> Result<Self, GuidanceServiceError> {
        let catalog = match rules_path {
            Some(path) => {
                let catalog = RuleCatalog::from_path(path).map_err(|source| {
                    GuidanceServiceError::Catalog {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                if catalog.is_empty() {
                    return Err(GuidanceServiceError::EmptyCatalog(path.to_path_buf()));
                }
                info!(path = %path.display(), rules = catalog.len(), "loaded rule catalog");
                catalog
            }
            None => {
                let catalog = RuleCatalog::standard();
                info!(rules = catalog.len(), "using built-in rule catalog");
                catalog
            }
        };

        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        self.engine.catalog()
    }

    pub fn build_profile(
        &self,
        documents: &[ExtractedDocument],
        name: Option<&str>,
    ) -> UnifiedProfile {
        let profile = build_profile(documents);
        debug!(
            documents = documents.len(),
            records = profile.education_history.len(),
            gpa = profile.gpa,
            "built unified profile"
        );
        match name {
            Some(name) => profile.with_name(name.trim()),
            None => profile,
        }
    }

    pub fn evaluate(&self, profile: &StudentProfile) -> EligibilityReport {
        let results = self.engine.evaluate(profile);
        let summary = summarize(&results);
        debug!(
            evaluated = summary.evaluated,
            eligible = summary.eligible,
            "evaluated eligibility"
        );
        EligibilityReport { results, summary }
    }

    pub fn synthesize(&self, profile: &UnifiedProfile) -> IntelligenceSummary {
        synthesize(profile)
    }

    /// Runs the whole pipeline: documents, unified profile, then matching and synthesis.
    pub fn assess(&self, request: AssessmentRequest, today: NaiveDate) -> GuidanceAssessment {
        let AssessmentRequest {
            documents,
            target_countries,
            name,
        } = request;

        let profile = self.build_profile(&documents, name.as_deref());
        let student = StudentProfile::from_unified(&profile, target_countries);
        let eligibility = self.evaluate(&student);
        let intelligence = self.synthesize(&profile);

        GuidanceAssessment {
            assessed_on: today,
            profile,
            student,
            eligibility,
            intelligence,
        }
    }
}

/// Error raised while assembling the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error("failed to load rule catalog from {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: RuleCatalogError,
    },
    #[error("rule catalog at {} contains no rules", .0.display())]
    EmptyCatalog(PathBuf),
}
