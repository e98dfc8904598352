//! Student guidance pipeline: extracted documents are merged into a unified profile, which is
//! then matched against the opportunity catalog and summarised for the dashboard.
//!
//! Every stage is a pure function over in-memory data. The service and router only wire the
//! stages together and share the read-only catalog.

pub mod catalog;
pub mod documents;
pub mod eligibility;
pub mod intelligence;
pub mod profile;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{RuleCatalog, RuleCatalogError};
pub use documents::{DocumentEntities, DocumentKind, EducationLevel, ExtractedDocument};
pub use eligibility::{
    evaluate, AcademicStream, CurrentEducation, EligibilityEngine, EligibilityResult,
    EligibilityRule, EligibilitySummary, RuleKind, StudentProfile,
};
pub use intelligence::{synthesize, IntelligenceSummary, RiskLevel};
pub use profile::{build_profile, UnifiedProfile};
pub use router::guidance_router;
pub use service::{
    AssessmentRequest, EligibilityReport, GuidanceAssessment, GuidanceService,
    GuidanceServiceError,
};
