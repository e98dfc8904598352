use serde::{Deserialize, Serialize};

use crate::guidance::profile::SubjectScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantStream {
    #[serde(rename = "STEM")]
    Stem,
    Commerce,
    #[serde(rename = "Arts/Humanities")]
    ArtsHumanities,
    General,
}

impl DominantStream {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stem => "STEM",
            Self::Commerce => "Commerce",
            Self::ArtsHumanities => "Arts/Humanities",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryOutlook {
    pub country: &'static str,
    pub admission_probability: f64,
    pub visa_probability: f64,
    pub roi: &'static str,
    pub recommended_field: &'static str,
}

/// Dashboard statistics derived from a unified profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceSummary {
    pub dominant_stream: DominantStream,
    pub gpa: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub top_subjects: Vec<SubjectScore>,
    pub country_outlook: Vec<CountryOutlook>,
    pub recommended_careers: Vec<&'static str>,
}
